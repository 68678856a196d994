//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::value_objects::session::Session;
use crate::errors::DomainError;

use super::trait_::SessionStore;

/// Mock session store for testing
pub struct MockSessionStore {
    session: Arc<RwLock<Option<Session>>>,
}

impl MockSessionStore {
    /// Create a new mock store with no active session
    pub fn new() -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut stored = self.session.write().await;
        *stored = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let stored = self.session.read().await;
        Ok(stored.clone())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut stored = self.session.write().await;
        *stored = None;
        Ok(())
    }
}
