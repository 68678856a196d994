//! Page repository trait for the dashboard page collection.

use async_trait::async_trait;

use crate::domain::entities::page::Page;
use crate::errors::DomainError;

/// Repository trait for the dashboard page collection (`adminPages`)
///
/// Page order is significant: when a requested page is missing, the viewer
/// falls back to the first element of the collection.
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Load the whole collection, in stored order
    async fn load_all(&self) -> Result<Vec<Page>, DomainError>;

    /// Replace the whole collection
    async fn save_all(&self, pages: &[Page]) -> Result<(), DomainError>;
}
