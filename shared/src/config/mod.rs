//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `latency` - Simulated result latency for interactive flows
//! - `storage` - Key-value store location and behavior

pub mod environment;
pub mod latency;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LoggingConfig};
pub use latency::LatencyConfig;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Key-value store configuration
    pub storage: StorageConfig,

    /// Simulated latency configuration
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            storage: StorageConfig::default(),
            latency: LatencyConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            storage: StorageConfig::default(),
            latency: LatencyConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    ///
    /// Production keeps the interactive pause applied before login and
    /// recovery results are shown.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            storage: StorageConfig::from_env(),
            latency: LatencyConfig::interactive(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let env = Environment::from_env();
        Self {
            environment: env,
            storage: StorageConfig::from_env(),
            latency: LatencyConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
