//! Business services containing domain logic and use cases.

pub mod admin;
pub mod auth;
pub mod pages;
pub mod recovery;
pub mod registration;

// Re-export commonly used types
pub use admin::AdminService;
pub use auth::{login_failure_message, AuthService, AuthServiceConfig};
pub use pages::PageService;
pub use recovery::{recovery_failure_message, RecoveryService};
pub use registration::RegistrationService;
