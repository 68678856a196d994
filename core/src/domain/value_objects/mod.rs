//! Value objects returned by the business services.

pub mod login;
pub mod page_resolution;
pub mod recovery;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use login::{
    landing_route, LoginResponse, ADMIN_ROUTE, DEFAULT_DASHBOARD_ROUTE, DEVELOPER_ROUTE,
};
pub use page_resolution::PageResolution;
pub use recovery::RecoveryOutcome;
pub use session::Session;
pub use stats::DirectoryStats;
