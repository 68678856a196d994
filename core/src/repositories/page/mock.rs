//! Mock implementation of PageRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::page::Page;
use crate::errors::DomainError;

use super::trait_::PageRepository;

/// Mock page repository for testing
pub struct MockPageRepository {
    pages: Arc<RwLock<Vec<Page>>>,
}

impl MockPageRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            pages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock repository seeded with records
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self {
            pages: Arc::new(RwLock::new(pages)),
        }
    }
}

impl Default for MockPageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageRepository for MockPageRepository {
    async fn load_all(&self) -> Result<Vec<Page>, DomainError> {
        let pages = self.pages.read().await;
        Ok(pages.clone())
    }

    async fn save_all(&self, pages: &[Page]) -> Result<(), DomainError> {
        let mut stored = self.pages.write().await;
        *stored = pages.to_vec();
        Ok(())
    }
}
