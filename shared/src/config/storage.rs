//! Key-value store configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Key-value store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON store file
    pub path: PathBuf,

    /// Create the store file (and parent directories) when missing
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/reportdeck-store.json"),
            create_missing: default_create_missing(),
        }
    }
}

impl StorageConfig {
    /// Create a configuration pointing at a specific store file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let path = env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default().path);
        let create_missing = env::var("STORE_CREATE_MISSING")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or_else(|_| default_create_missing());

        Self {
            path,
            create_missing,
        }
    }
}

fn default_create_missing() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_config() {
        let config = StorageConfig::default();
        assert_eq!(config.path, PathBuf::from("data/reportdeck-store.json"));
        assert!(config.create_missing);
    }

    #[test]
    fn test_explicit_path() {
        let config = StorageConfig::new("/tmp/store.json");
        assert_eq!(config.path, PathBuf::from("/tmp/store.json"));
    }
}
