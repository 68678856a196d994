//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::login::{
    LoginResponse, ADMIN_ROUTE, DEVELOPER_ROUTE,
};
use crate::domain::value_objects::session::Session;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionStore, UserRepository};

use super::config::AuthServiceConfig;
use super::delay::ResultDelay;

/// Built-in developer bypass account name
const DEVELOPER_USERNAME: &str = "developer";

/// Access code paired with the developer bypass account
const DEVELOPER_ACCESS_CODE: &str = "jnecbn18";

/// Built-in default administrator account name and password
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Identifier recorded for the default administrator session
const DEFAULT_ADMIN_USER_ID: &str = "default-admin";

/// Authentication service resolving identifier/secret pairs against the
/// account directory
///
/// The directory is reloaded from the injected repository on every attempt;
/// nothing is cached between invocations.
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    /// Account directory
    user_repository: Arc<U>,
    /// Store for the active session identity
    session_store: Arc<S>,
    /// Pre-result pause
    delay: ResultDelay,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for the approved user collection
    /// * `session_store` - Store for the active session identity
    /// * `config` - Service configuration
    pub fn new(user_repository: Arc<U>, session_store: Arc<S>, config: AuthServiceConfig) -> Self {
        Self {
            user_repository,
            session_store,
            delay: ResultDelay::new(config.latency),
        }
    }

    /// Resolve an identifier/secret pair to a login outcome
    ///
    /// The resolution order is fixed:
    /// 1. the built-in developer bypass (checked before the directory is
    ///    even loaded);
    /// 2. the first record whose email equals the identifier
    ///    (case-sensitive) with a matching password;
    /// 3. the first record whose name equals the identifier
    ///    (case-insensitive) with a matching password;
    /// 4. the built-in default-admin bypass — a regular directory match
    ///    always takes precedence over it;
    /// 5. otherwise the generic invalid-credentials error.
    ///
    /// On success the session identity is recorded and the landing route is
    /// derived from the matched record's role and assigned pages.
    pub async fn login(&self, identifier: &str, secret: &str) -> DomainResult<LoginResponse> {
        self.delay.before_login_result().await;

        // Built-in developer bypass, ahead of the directory scan
        if identifier == DEVELOPER_USERNAME && secret == DEVELOPER_ACCESS_CODE {
            let response = LoginResponse {
                user_id: DEVELOPER_USERNAME.to_string(),
                username: DEVELOPER_USERNAME.to_string(),
                role: Role::Developer,
                redirect: DEVELOPER_ROUTE.to_string(),
            };
            self.session_store.save(&Session::from_login(&response)).await?;
            info!(username = DEVELOPER_USERNAME, "Developer bypass login");
            return Ok(response);
        }

        let users = self.user_repository.load_all().await?;

        if let Some(user) = Self::match_credentials(&users, identifier, secret) {
            let response = LoginResponse::for_user(user);
            self.session_store.save(&Session::for_user(user)).await?;
            info!(
                user_id = %user.id,
                role = %user.role,
                redirect = %response.redirect,
                "Login succeeded"
            );
            return Ok(response);
        }

        // Built-in default administrator, only when no record matched
        if identifier == DEFAULT_ADMIN_USERNAME && secret == DEFAULT_ADMIN_PASSWORD {
            let response = LoginResponse {
                user_id: DEFAULT_ADMIN_USER_ID.to_string(),
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                role: Role::Admin,
                redirect: ADMIN_ROUTE.to_string(),
            };
            self.session_store.save(&Session::from_login(&response)).await?;
            info!(username = DEFAULT_ADMIN_USERNAME, "Default administrator login");
            return Ok(response);
        }

        warn!(identifier, "Login failed: no matching record");
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    }

    /// Clear the recorded session identity
    pub async fn logout(&self) -> DomainResult<()> {
        self.session_store.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// Load the currently recorded session identity, if any
    pub async fn current_session(&self) -> DomainResult<Option<Session>> {
        self.session_store.load().await
    }

    /// Two-pass directory scan: the email pass runs to completion before the
    /// name pass is attempted, and within each pass the first element wins.
    fn match_credentials<'a>(users: &'a [User], identifier: &str, secret: &str) -> Option<&'a User> {
        users
            .iter()
            .find(|u| u.email == identifier && u.password == secret)
            .or_else(|| {
                let wanted = identifier.to_lowercase();
                users
                    .iter()
                    .find(|u| u.name.to_lowercase() == wanted && u.password == secret)
            })
    }
}

/// Map a login error to the message the flow displays
///
/// Anything other than a credential mismatch (store read failures, malformed
/// collections) collapses into one generic message.
pub fn login_failure_message(error: &DomainError) -> &'static str {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => "Invalid username or password",
        _ => "An error occurred during login",
    }
}
