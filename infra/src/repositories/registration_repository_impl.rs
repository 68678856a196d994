//! Store-backed implementation of the RegistrationRepository trait.

use std::sync::Arc;

use async_trait::async_trait;

use rd_core::domain::entities::registration::PendingRegistration;
use rd_core::errors::DomainError;
use rd_core::repositories::RegistrationRepository;

use super::{load_collection, save_collection};
use crate::storage::{keys, KeyValueStore};

/// Registration repository over the `pendingRegistrations` store key
pub struct StoreRegistrationRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> StoreRegistrationRepository<S>
where
    S: KeyValueStore,
{
    /// Create a new repository over a store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> RegistrationRepository for StoreRegistrationRepository<S>
where
    S: KeyValueStore,
{
    async fn load_all(&self) -> Result<Vec<PendingRegistration>, DomainError> {
        load_collection(self.store.as_ref(), keys::PENDING_REGISTRATIONS).await
    }

    async fn save_all(&self, registrations: &[PendingRegistration]) -> Result<(), DomainError> {
        save_collection(self.store.as_ref(), keys::PENDING_REGISTRATIONS, registrations).await
    }
}
