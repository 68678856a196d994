//! Walks the login, recovery, and page lookup flows against a file store.
//!
//! Run with: cargo run -p rd_infra --example login_demo

use std::sync::Arc;

use anyhow::Result;

use rd_core::domain::entities::page::Page;
use rd_core::domain::entities::user::{Role, User};
use rd_core::services::admin::AdminService;
use rd_core::services::auth::{login_failure_message, AuthService, AuthServiceConfig};
use rd_core::services::pages::PageService;
use rd_core::services::recovery::RecoveryService;
use rd_infra::storage::FileStore;
use rd_infra::{
    StorePageRepository, StoreRegistrationRepository, StoreSessionStore, StoreUserRepository,
};
use rd_shared::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    rd_infra::telemetry::init(&config.logging);

    let store = Arc::new(FileStore::open(&config.storage)?);
    let users = Arc::new(StoreUserRepository::new(store.clone()));
    let registrations = Arc::new(StoreRegistrationRepository::new(store.clone()));
    let pages = Arc::new(StorePageRepository::new(store.clone()));
    let sessions = Arc::new(StoreSessionStore::new(store));

    let admin = AdminService::new(users.clone(), registrations.clone(), pages.clone());

    // Seed a directory and a page on first run
    if admin.list_users().await?.is_empty() {
        admin
            .create_user(
                User::new("Alice", "alice@example.com", "hunter2", Role::Viewer)
                    .with_phone_number("555-0100"),
            )
            .await?;
        let page = Page::new("Performance", "Daily shipment KPIs")
            .with_embed_url("https://app.powerbi.com/view?r=demo");
        let page_id = page.id.clone();
        admin.create_page(page).await?;

        let mut alice = admin.list_users().await?.remove(0);
        alice.assigned_pages = Some(vec![page_id]);
        admin.update_user(alice).await?;
    }

    let service_config = AuthServiceConfig {
        latency: config.latency,
    };
    let auth = AuthService::new(users.clone(), sessions, service_config.clone());

    match auth.login("alice", "hunter2").await {
        Ok(response) => println!(
            "Logged in as {} ({}), landing on {}",
            response.username, response.role, response.redirect
        ),
        Err(error) => println!("Login failed: {}", login_failure_message(&error)),
    }

    let recovery = RecoveryService::new(users, registrations, service_config);
    let outcome = recovery.recover("ALICE", "555-0100").await?;
    println!("Recovery outcome: {}", outcome.message());

    let viewer = PageService::new(pages);
    let resolution = viewer.resolve("missing-page").await?;
    match resolution.redirect_route() {
        Some(route) => println!("Missing page redirects to {}", route),
        None => println!("Page found"),
    }

    let stats = admin.stats().await?;
    println!(
        "Directory: {} pages, {} users ({} admin / {} viewer)",
        stats.total_pages, stats.total_users, stats.admin_users, stats.viewer_users
    );

    Ok(())
}
