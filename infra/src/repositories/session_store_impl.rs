//! Store-backed implementation of the SessionStore trait.
//!
//! The session identity lives under three discrete string keys (`userId`,
//! `username`, `userRole`) rather than a single record.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use rd_core::domain::entities::user::Role;
use rd_core::domain::value_objects::session::Session;
use rd_core::errors::DomainError;
use rd_core::repositories::SessionStore;

use super::store_failure;
use crate::storage::{keys, KeyValueStore};

/// Session store over the discrete session keys
pub struct StoreSessionStore<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> StoreSessionStore<S>
where
    S: KeyValueStore,
{
    /// Create a new session store over a key-value store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn as_string(value: Value, key: &str) -> Result<String, DomainError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(DomainError::Internal {
                message: format!("Malformed `{}` session key: {}", key, other),
            }),
        }
    }
}

#[async_trait]
impl<S> SessionStore for StoreSessionStore<S>
where
    S: KeyValueStore,
{
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.store
            .set(keys::USER_ROLE, json!(session.role.as_str()))
            .await
            .map_err(store_failure)?;
        self.store
            .set(keys::USERNAME, json!(session.username))
            .await
            .map_err(store_failure)?;
        self.store
            .set(keys::USER_ID, json!(session.user_id))
            .await
            .map_err(store_failure)?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let user_id = self.store.get(keys::USER_ID).await.map_err(store_failure)?;
        let username = self.store.get(keys::USERNAME).await.map_err(store_failure)?;
        let role = self.store.get(keys::USER_ROLE).await.map_err(store_failure)?;

        let (user_id, username, role) = match (user_id, username, role) {
            (Some(user_id), Some(username), Some(role)) => (user_id, username, role),
            // Any missing key means no recorded session
            _ => return Ok(None),
        };

        let role = Self::as_string(role, keys::USER_ROLE)?
            .parse::<Role>()
            .map_err(|e| DomainError::Internal { message: e })?;

        Ok(Some(Session {
            user_id: Self::as_string(user_id, keys::USER_ID)?,
            username: Self::as_string(username, keys::USERNAME)?,
            role,
        }))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.store.remove(keys::USER_ROLE).await.map_err(store_failure)?;
        self.store.remove(keys::USERNAME).await.map_err(store_failure)?;
        self.store.remove(keys::USER_ID).await.map_err(store_failure)?;
        Ok(())
    }
}
