//! Key-value store collaborator
//!
//! The domain layer treats persistence as an external key-value collection
//! with whole-value reads and writes, browser-local-storage style. Keys hold
//! JSON values; collections are stored as whole arrays and never partially
//! updated.

mod file_store;
mod memory_store;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Store keys used by the ReportDeck collections
pub mod keys {
    /// Approved user collection
    pub const ADMIN_USERS: &str = "adminUsers";

    /// Pending registration collection
    pub const PENDING_REGISTRATIONS: &str = "pendingRegistrations";

    /// Dashboard page collection
    pub const ADMIN_PAGES: &str = "adminPages";

    /// Active session: account identifier
    pub const USER_ID: &str = "userId";

    /// Active session: display name
    pub const USERNAME: &str = "username";

    /// Active session: role
    pub const USER_ROLE: &str = "userRole";
}

/// Storage-specific error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store content was not valid JSON
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// External key-value collaborator
///
/// `get` returns the stored JSON value for a key, or `None` when the key is
/// absent. `set` replaces the whole value. Implementations serialize their
/// own reads and writes; callers never observe partial updates.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove the value stored under `key`
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
