//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ReportDeck
//! application, following Clean Architecture principles. It provides the
//! key-value store collaborator the domain layer is written against, plus
//! concrete repository implementations on top of it.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Storage**: the `KeyValueStore` trait with a JSON-file-backed store
//!   (the local-storage analog) and an in-memory store for tests and demos
//! - **Repositories**: store-backed implementations of every repository
//!   trait in `rd_core`
//! - **Telemetry**: tracing subscriber initialization

/// Storage module - key-value store trait and implementations
pub mod storage;

/// Repositories module - store-backed repository implementations
pub mod repositories;

/// Telemetry module - tracing initialization
pub mod telemetry;

// Re-export the building blocks most callers wire together
pub use repositories::{
    StorePageRepository, StoreRegistrationRepository, StoreSessionStore, StoreUserRepository,
};
pub use storage::{keys, FileStore, KeyValueStore, MemoryStore, StoreError};
