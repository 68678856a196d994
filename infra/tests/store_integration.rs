//! Integration tests wiring the domain services to the file-backed store

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use rd_core::domain::entities::page::Page;
use rd_core::domain::entities::user::{Role, User};
use rd_core::domain::value_objects::page_resolution::PageResolution;
use rd_core::domain::value_objects::recovery::RecoveryOutcome;
use rd_core::errors::DomainError;
use rd_core::repositories::{SessionStore, UserRepository};
use rd_core::services::admin::AdminService;
use rd_core::services::auth::{AuthService, AuthServiceConfig};
use rd_core::services::pages::PageService;
use rd_core::services::recovery::RecoveryService;
use rd_core::services::registration::RegistrationService;
use rd_infra::storage::{keys, FileStore, KeyValueStore};
use rd_infra::{
    StorePageRepository, StoreRegistrationRepository, StoreSessionStore, StoreUserRepository,
};
use rd_shared::config::storage::StorageConfig;

fn open_store(dir: &TempDir) -> Arc<FileStore> {
    let config = StorageConfig::new(dir.path().join("store.json"));
    Arc::new(FileStore::open(&config).unwrap())
}

#[tokio::test]
async fn absent_collections_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let users = StoreUserRepository::new(store.clone());
    assert!(users.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_collection_collapses_to_internal_error() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    store
        .set(keys::ADMIN_USERS, json!({"not": "an array"}))
        .await
        .unwrap();

    let users = StoreUserRepository::new(store.clone());
    let error = users.load_all().await.unwrap_err();
    assert!(matches!(error, DomainError::Internal { .. }));
}

#[tokio::test]
async fn login_flow_against_seeded_store() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let users = Arc::new(StoreUserRepository::new(store.clone()));
    let sessions = Arc::new(StoreSessionStore::new(store.clone()));

    users
        .save_all(&[User::new("Alice", "a@x.com", "hunter2", Role::Viewer)
            .with_assigned_pages(vec!["performance".to_string()])])
        .await
        .unwrap();

    let auth = AuthService::new(users, sessions.clone(), AuthServiceConfig::default());
    let response = auth.login("alice", "hunter2").await.unwrap();
    assert_eq!(response.redirect, "/dashboard/performance");

    // The session landed in the store under the discrete keys
    assert_eq!(
        store.get(keys::USER_ROLE).await.unwrap(),
        Some(json!("viewer"))
    );
    assert_eq!(
        store.get(keys::USERNAME).await.unwrap(),
        Some(json!("Alice"))
    );

    auth.logout().await.unwrap();
    assert_eq!(store.get(keys::USER_ROLE).await.unwrap(), None);
    assert!(sessions.load().await.unwrap().is_none());
}

#[tokio::test]
async fn session_survives_store_reopen() {
    let dir = TempDir::new().unwrap();
    let config = StorageConfig::new(dir.path().join("store.json"));

    {
        let store = Arc::new(FileStore::open(&config).unwrap());
        let users = Arc::new(StoreUserRepository::new(store.clone()));
        let sessions = Arc::new(StoreSessionStore::new(store.clone()));
        users
            .save_all(&[User::new("Root", "root@x.com", "s3cret", Role::Admin)])
            .await
            .unwrap();

        let auth = AuthService::new(users, sessions, AuthServiceConfig::default());
        auth.login("root", "s3cret").await.unwrap();
    }

    let store = Arc::new(FileStore::open(&config).unwrap());
    let sessions = StoreSessionStore::new(store);
    let session = sessions.load().await.unwrap().unwrap();
    assert_eq!(session.username, "Root");
    assert_eq!(session.role, Role::Admin);
}

#[tokio::test]
async fn registration_review_and_recovery_flow() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let users = Arc::new(StoreUserRepository::new(store.clone()));
    let registrations = Arc::new(StoreRegistrationRepository::new(store.clone()));
    let pages = Arc::new(StorePageRepository::new(store.clone()));

    let intake = RegistrationService::new(registrations.clone());
    let admin = AdminService::new(users.clone(), registrations.clone(), pages);
    let recovery = RecoveryService::new(
        users.clone(),
        registrations.clone(),
        AuthServiceConfig::default(),
    );

    let submitted = intake.submit("charlie", "555-0100", "pw").await.unwrap();

    // Still pending: recovery reports the pending classification
    assert_eq!(
        recovery.recover("charlie", "555-0100").await.unwrap(),
        RecoveryOutcome::PendingApproval
    );

    // Approval inserts the viewer record; the approved directory now wins
    admin.approve_registration(&submitted.id).await.unwrap();
    let outcome = recovery.recover("CHARLIE", "555-0100").await.unwrap();
    match outcome {
        RecoveryOutcome::Recovered { user } => {
            assert_eq!(user.role, Role::Viewer);
            assert_eq!(user.password, "pw");
        }
        other => panic!("Expected Recovered, got {:?}", other),
    }
}

#[tokio::test]
async fn admin_stats_and_page_resolution_against_store() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let users = Arc::new(StoreUserRepository::new(store.clone()));
    let registrations = Arc::new(StoreRegistrationRepository::new(store.clone()));
    let page_repository = Arc::new(StorePageRepository::new(store.clone()));

    let admin = AdminService::new(users, registrations, page_repository.clone());
    let viewer = PageService::new(page_repository);

    let performance = Page::new("Performance", "Daily shipment KPIs");
    let performance_id = performance.id.clone();
    admin.create_page(performance).await.unwrap();
    admin
        .create_user(User::new("Root", "root@x.com", "pw", Role::Admin))
        .await
        .unwrap();
    admin
        .create_user(User::new("Alice", "a@x.com", "pw", Role::Viewer))
        .await
        .unwrap();

    let stats = admin.stats().await.unwrap();
    assert_eq!(stats.total_pages, 1);
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.admin_users, 1);
    assert_eq!(stats.viewer_users, 1);

    assert!(viewer.resolve(&performance_id).await.unwrap().is_found());
    assert_eq!(
        viewer.resolve("missing").await.unwrap(),
        PageResolution::FallbackToFirst {
            page_id: performance_id
        }
    );
}
