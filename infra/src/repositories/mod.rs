//! Store-backed implementations of the `rd_core` repository traits.
//!
//! Each collection is read and rewritten as a whole JSON array; an absent
//! key reads as an empty collection. Malformed store content and I/O
//! failures both collapse into the generic internal-error classification,
//! leaving callers a single failure shape to report.

mod page_repository_impl;
mod registration_repository_impl;
mod session_store_impl;
mod user_repository_impl;

pub use page_repository_impl::StorePageRepository;
pub use registration_repository_impl::StoreRegistrationRepository;
pub use session_store_impl::StoreSessionStore;
pub use user_repository_impl::StoreUserRepository;

use rd_core::errors::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{KeyValueStore, StoreError};

pub(crate) fn store_failure(error: StoreError) -> DomainError {
    DomainError::Internal {
        message: error.to_string(),
    }
}

/// Read a whole collection from the store (empty when the key is absent)
pub(crate) async fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>, DomainError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key).await.map_err(store_failure)? {
        Some(value) => serde_json::from_value(value).map_err(|e| DomainError::Internal {
            message: format!("Malformed `{}` collection: {}", key, e),
        }),
        None => Ok(Vec::new()),
    }
}

/// Replace a whole collection in the store
pub(crate) async fn save_collection<S, T>(
    store: &S,
    key: &str,
    records: &[T],
) -> Result<(), DomainError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let value = serde_json::to_value(records).map_err(|e| DomainError::Internal {
        message: format!("Could not serialize `{}` collection: {}", key, e),
    })?;
    store.set(key, value).await.map_err(store_failure)
}
