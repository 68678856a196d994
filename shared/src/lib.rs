//! Shared utilities and common types for the ReportDeck backend
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types
//! - Utility functions (validation, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LatencyConfig, LoggingConfig, StorageConfig};
pub use utils::validation;
