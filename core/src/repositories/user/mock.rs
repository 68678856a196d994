//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
///
/// Keeps the records in a plain vector so tests exercise the same
/// first-match-wins ordering as the store-backed implementation.
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock repository seeded with records
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn load_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), DomainError> {
        let mut stored = self.users.write().await;
        *stored = users.to_vec();
        Ok(())
    }
}
