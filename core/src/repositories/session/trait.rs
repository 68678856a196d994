//! Session store trait for the active login identity.

use async_trait::async_trait;

use crate::domain::value_objects::session::Session;
use crate::errors::DomainError;

/// Store for the active session identity
///
/// A single session exists at a time; a successful login overwrites any
/// previous identity and logout clears it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the active session
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Load the active session, if one is recorded
    async fn load(&self) -> Result<Option<Session>, DomainError>;

    /// Clear the active session
    async fn clear(&self) -> Result<(), DomainError>;
}
