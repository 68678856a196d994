//! Mock implementation of RegistrationRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::registration::PendingRegistration;
use crate::errors::DomainError;

use super::trait_::RegistrationRepository;

/// Mock registration repository for testing
pub struct MockRegistrationRepository {
    registrations: Arc<RwLock<Vec<PendingRegistration>>>,
}

impl MockRegistrationRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            registrations: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock repository seeded with records
    pub fn with_registrations(registrations: Vec<PendingRegistration>) -> Self {
        Self {
            registrations: Arc::new(RwLock::new(registrations)),
        }
    }
}

impl Default for MockRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationRepository for MockRegistrationRepository {
    async fn load_all(&self) -> Result<Vec<PendingRegistration>, DomainError> {
        let registrations = self.registrations.read().await;
        Ok(registrations.clone())
    }

    async fn save_all(&self, registrations: &[PendingRegistration]) -> Result<(), DomainError> {
        let mut stored = self.registrations.write().await;
        *stored = registrations.to_vec();
        Ok(())
    }
}
