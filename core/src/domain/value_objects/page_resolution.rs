//! Page lookup resolution for the dynamic page viewer.

use serde::{Deserialize, Serialize};

use crate::domain::entities::page::Page;
use crate::domain::value_objects::login::DEFAULT_DASHBOARD_ROUTE;

/// Result of resolving a page identifier against the page collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resolution", rename_all = "camelCase")]
pub enum PageResolution {
    /// The requested page exists
    Found { page: Page },

    /// The requested page is missing; the viewer redirects to the first
    /// available page instead
    FallbackToFirst { page_id: String },

    /// The collection is empty; the viewer redirects to the default
    /// dashboard
    FallbackToDefault,
}

impl PageResolution {
    /// Checks if the requested page was found
    pub fn is_found(&self) -> bool {
        matches!(self, PageResolution::Found { .. })
    }

    /// Route the viewer navigates to when the page was not found
    ///
    /// `Found` resolutions render in place and carry no redirect.
    pub fn redirect_route(&self) -> Option<String> {
        match self {
            PageResolution::Found { .. } => None,
            // The page viewer redirects under /page/, unlike the login
            // landing routes which live under /dashboard/.
            PageResolution::FallbackToFirst { page_id } => Some(format!("/page/{}", page_id)),
            PageResolution::FallbackToDefault => Some(DEFAULT_DASHBOARD_ROUTE.to_string()),
        }
    }
}
