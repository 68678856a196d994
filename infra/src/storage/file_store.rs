//! JSON-file-backed key-value store.
//!
//! The store file holds a single JSON object mapping keys to values, the
//! on-disk analog of the browser local storage area. Every write persists
//! the whole object again (last write wins).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use rd_shared::config::storage::StorageConfig;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{KeyValueStore, StoreError};

/// File-backed key-value store
pub struct FileStore {
    /// Store file location
    path: PathBuf,
    /// In-memory view of the store file; the mutex serializes writers
    entries: Mutex<HashMap<String, Value>>,
}

impl FileStore {
    /// Open a store file, loading its current content
    ///
    /// A missing file starts the store empty; with `create_missing` set the
    /// file (and its parent directories) are created eagerly.
    pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        let entries = if config.path.exists() {
            let raw = fs::read_to_string(&config.path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            if config.create_missing {
                if let Some(parent) = config.path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(&config.path, "{}")?;
                info!(path = %config.path.display(), "Created store file");
            }
            HashMap::new()
        };

        debug!(
            path = %config.path.display(),
            entries = entries.len(),
            "Opened store file"
        );
        Ok(Self {
            path: config.path.clone(),
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
