//! Store-backed implementation of the PageRepository trait.

use std::sync::Arc;

use async_trait::async_trait;

use rd_core::domain::entities::page::Page;
use rd_core::errors::DomainError;
use rd_core::repositories::PageRepository;

use super::{load_collection, save_collection};
use crate::storage::{keys, KeyValueStore};

/// Page repository over the `adminPages` store key
pub struct StorePageRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> StorePageRepository<S>
where
    S: KeyValueStore,
{
    /// Create a new repository over a store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> PageRepository for StorePageRepository<S>
where
    S: KeyValueStore,
{
    async fn load_all(&self) -> Result<Vec<Page>, DomainError> {
        load_collection(self.store.as_ref(), keys::ADMIN_PAGES).await
    }

    async fn save_all(&self, pages: &[Page]) -> Result<(), DomainError> {
        save_collection(self.store.as_ref(), keys::ADMIN_PAGES, pages).await
    }
}
