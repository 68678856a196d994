//! User repository trait defining the interface to the account directory.
//!
//! The directory is sourced wholesale from the external key-value store on
//! each operation: no caching, no indexing, and no partial updates. Any
//! mutation rewrites the entire collection (last write wins).

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for the approved user collection (`adminUsers`)
///
/// Implementations load and replace the collection as a whole. Record order
/// is significant: the matcher resolves ties by taking the first matching
/// element.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load the whole collection, in stored order
    ///
    /// # Returns
    /// * `Ok(users)` - All records; an empty vector when the collection is
    ///   absent from the store
    /// * `Err(DomainError)` - The store could not be read or the collection
    ///   was malformed
    async fn load_all(&self) -> Result<Vec<User>, DomainError>;

    /// Replace the whole collection
    ///
    /// # Arguments
    /// * `users` - The records to persist, in order
    async fn save_all(&self, users: &[User]) -> Result<(), DomainError>;
}
