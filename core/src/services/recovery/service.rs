//! Password recovery lookup implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::registration::PendingRegistration;
use crate::domain::entities::user::User;
use crate::domain::value_objects::recovery::RecoveryOutcome;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RegistrationRepository, UserRepository};
use crate::services::auth::{AuthServiceConfig, ResultDelay};

/// Password recovery service
///
/// Both collections are reloaded from their repositories on every lookup.
/// The approved directory is checked first and wins outright, even when a
/// pending or rejected registration carries the same identifier.
pub struct RecoveryService<U, R>
where
    U: UserRepository,
    R: RegistrationRepository,
{
    /// Approved account directory
    user_repository: Arc<U>,
    /// Pending registration collection
    registration_repository: Arc<R>,
    /// Pre-result pause
    delay: ResultDelay,
}

impl<U, R> RecoveryService<U, R>
where
    U: UserRepository,
    R: RegistrationRepository,
{
    /// Create a new recovery service
    pub fn new(
        user_repository: Arc<U>,
        registration_repository: Arc<R>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            registration_repository,
            delay: ResultDelay::new(config.latency),
        }
    }

    /// Resolve an identifier/phone pair to a recovery outcome
    ///
    /// The identifier matches the record's name or email case-insensitively;
    /// the phone number must match verbatim (no trimming, no formatting
    /// normalization). Within each collection the first matching element
    /// wins.
    pub async fn recover(&self, identifier: &str, phone: &str) -> DomainResult<RecoveryOutcome> {
        self.delay.before_recovery_result().await;

        let users = self.user_repository.load_all().await?;
        if let Some(user) = Self::match_approved(&users, identifier, phone) {
            info!(user_id = %user.id, "Credentials recovered");
            return Ok(RecoveryOutcome::Recovered { user: user.clone() });
        }

        let registrations = self.registration_repository.load_all().await?;
        if let Some(registration) = Self::match_pending(&registrations, identifier, phone) {
            if registration.is_pending() {
                info!(registration_id = %registration.id, "Recovery hit a pending registration");
                return Ok(RecoveryOutcome::PendingApproval);
            }
            if registration.is_rejected() {
                info!(registration_id = %registration.id, "Recovery hit a rejected registration");
                return Ok(RecoveryOutcome::Rejected);
            }
            // An approved registration satisfies neither classification; the
            // matching User record is expected to exist on its own.
        }

        warn!(identifier, "Recovery found no matching record");
        Ok(RecoveryOutcome::NotFound)
    }

    fn match_approved<'a>(users: &'a [User], identifier: &str, phone: &str) -> Option<&'a User> {
        let wanted = identifier.to_lowercase();
        users.iter().find(|u| {
            (u.name.to_lowercase() == wanted || u.email.to_lowercase() == wanted)
                && u.phone_number.as_deref() == Some(phone)
        })
    }

    fn match_pending<'a>(
        registrations: &'a [PendingRegistration],
        identifier: &str,
        phone: &str,
    ) -> Option<&'a PendingRegistration> {
        let wanted = identifier.to_lowercase();
        registrations
            .iter()
            .find(|r| r.username.to_lowercase() == wanted && r.phone_number == phone)
    }
}

/// Map a recovery error to the message the flow displays
pub fn recovery_failure_message(_error: &DomainError) -> &'static str {
    "An error occurred during password recovery"
}
