//! Page lookup implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::value_objects::page_resolution::PageResolution;
use crate::errors::DomainResult;
use crate::repositories::PageRepository;

/// Page lookup service for the dynamic page viewer
pub struct PageService<P>
where
    P: PageRepository,
{
    /// Dashboard page collection
    page_repository: Arc<P>,
}

impl<P> PageService<P>
where
    P: PageRepository,
{
    /// Create a new page service
    pub fn new(page_repository: Arc<P>) -> Self {
        Self { page_repository }
    }

    /// Resolve a page identifier against the collection
    ///
    /// A missing identifier falls back to the first available page, and an
    /// empty collection falls back to the default dashboard route.
    pub async fn resolve(&self, page_id: &str) -> DomainResult<PageResolution> {
        let pages = self.page_repository.load_all().await?;

        if let Some(page) = pages.iter().find(|p| p.id == page_id) {
            info!(page_id, "Page resolved");
            return Ok(PageResolution::Found { page: page.clone() });
        }

        match pages.first() {
            Some(first) => {
                warn!(page_id, fallback = %first.id, "Page missing, redirecting to first page");
                Ok(PageResolution::FallbackToFirst {
                    page_id: first.id.clone(),
                })
            }
            None => {
                warn!(page_id, "Page collection empty, redirecting to default dashboard");
                Ok(PageResolution::FallbackToDefault)
            }
        }
    }
}
