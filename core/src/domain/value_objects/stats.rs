//! Directory statistics shown on the admin console landing view.

use serde::{Deserialize, Serialize};

/// Aggregate counts over the page and user collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    /// Number of pages in the `adminPages` collection
    pub total_pages: u64,

    /// Number of users in the `adminUsers` collection
    pub total_users: u64,

    /// Users carrying the `admin` role
    pub admin_users: u64,

    /// Users carrying the `viewer` role
    pub viewer_users: u64,
}
