//! Registration repository trait for the pending sign-up collection.

use async_trait::async_trait;

use crate::domain::entities::registration::PendingRegistration;
use crate::errors::DomainError;

/// Repository trait for the pending registration collection
/// (`pendingRegistrations`)
///
/// Like the user directory, the collection is read and rewritten as a whole;
/// approval and rejection flip the status in place and persist the full
/// array again.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Load the whole collection, in stored order
    async fn load_all(&self) -> Result<Vec<PendingRegistration>, DomainError>;

    /// Replace the whole collection
    async fn save_all(&self, registrations: &[PendingRegistration]) -> Result<(), DomainError>;
}
