//! Store-backed implementation of the UserRepository trait.

use std::sync::Arc;

use async_trait::async_trait;

use rd_core::domain::entities::user::User;
use rd_core::errors::DomainError;
use rd_core::repositories::UserRepository;

use super::{load_collection, save_collection};
use crate::storage::{keys, KeyValueStore};

/// User repository over the `adminUsers` store key
pub struct StoreUserRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> StoreUserRepository<S>
where
    S: KeyValueStore,
{
    /// Create a new repository over a store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UserRepository for StoreUserRepository<S>
where
    S: KeyValueStore,
{
    async fn load_all(&self) -> Result<Vec<User>, DomainError> {
        load_collection(self.store.as_ref(), keys::ADMIN_USERS).await
    }

    async fn save_all(&self, users: &[User]) -> Result<(), DomainError> {
        save_collection(self.store.as_ref(), keys::ADMIN_USERS, users).await
    }
}
