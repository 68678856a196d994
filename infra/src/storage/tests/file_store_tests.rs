use serde_json::json;
use tempfile::TempDir;

use rd_shared::config::storage::StorageConfig;

use crate::storage::{FileStore, KeyValueStore};

fn temp_config(dir: &TempDir) -> StorageConfig {
    StorageConfig::new(dir.path().join("store.json"))
}

#[tokio::test]
async fn test_missing_key_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(&temp_config(&dir)).unwrap();

    assert_eq!(store.get("adminUsers").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(&temp_config(&dir)).unwrap();

    store
        .set("adminUsers", json!([{"id": "1", "name": "alice"}]))
        .await
        .unwrap();
    let value = store.get("adminUsers").await.unwrap().unwrap();
    assert_eq!(value[0]["name"], "alice");
}

#[tokio::test]
async fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir);

    {
        let store = FileStore::open(&config).unwrap();
        store.set("userRole", json!("admin")).await.unwrap();
    }

    let reopened = FileStore::open(&config).unwrap();
    assert_eq!(reopened.get("userRole").await.unwrap(), Some(json!("admin")));
}

#[tokio::test]
async fn test_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(&temp_config(&dir)).unwrap();

    store.set("adminPages", json!([{"id": "a"}])).await.unwrap();
    store.set("adminPages", json!([{"id": "b"}])).await.unwrap();

    let value = store.get("adminPages").await.unwrap().unwrap();
    assert_eq!(value[0]["id"], "b");
}

#[tokio::test]
async fn test_remove_deletes_key() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(&temp_config(&dir)).unwrap();

    store.set("username", json!("alice")).await.unwrap();
    store.remove("username").await.unwrap();
    assert_eq!(store.get("username").await.unwrap(), None);

    // Removing an absent key is a no-op
    store.remove("username").await.unwrap();
}

#[tokio::test]
async fn test_create_missing_writes_empty_object() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir);

    let _store = FileStore::open(&config).unwrap();
    let raw = std::fs::read_to_string(&config.path).unwrap();
    assert_eq!(raw, "{}");
}

#[test]
fn test_open_rejects_malformed_store_file() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir);
    std::fs::write(&config.path, "not json at all").unwrap();

    assert!(FileStore::open(&config).is_err());
}
