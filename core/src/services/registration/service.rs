//! Registration intake implementation

use std::sync::Arc;

use rd_shared::utils::validation::validators;
use tracing::info;

use crate::domain::entities::registration::PendingRegistration;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::RegistrationRepository;

/// Registration intake service
pub struct RegistrationService<R>
where
    R: RegistrationRepository,
{
    /// Pending registration collection
    registration_repository: Arc<R>,
}

impl<R> RegistrationService<R>
where
    R: RegistrationRepository,
{
    /// Create a new registration service
    pub fn new(registration_repository: Arc<R>) -> Self {
        Self {
            registration_repository,
        }
    }

    /// Submit a new sign-up request
    ///
    /// Validates the inputs, rejects a username that already sits in the
    /// pending queue, and appends the record with status `pending`.
    ///
    /// # Returns
    ///
    /// * `Ok(PendingRegistration)` - The stored record
    /// * `Err(DomainError)` - Validation failed or the store could not be
    ///   updated
    pub async fn submit(
        &self,
        username: &str,
        phone_number: &str,
        password: &str,
    ) -> DomainResult<PendingRegistration> {
        if !validators::not_empty(username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if !validators::not_empty(password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }
        if !validators::is_plausible_phone(phone_number) {
            return Err(ValidationError::InvalidFormat {
                field: "phoneNumber".to_string(),
            }
            .into());
        }

        let mut registrations = self.registration_repository.load_all().await?;

        let wanted = username.to_lowercase();
        let duplicate = registrations
            .iter()
            .any(|r| r.is_pending() && r.username.to_lowercase() == wanted);
        if duplicate {
            return Err(ValidationError::DuplicateValue {
                field: "username".to_string(),
            }
            .into());
        }

        let registration = PendingRegistration::new(username, phone_number, password);
        registrations.push(registration.clone());
        self.registration_repository
            .save_all(&registrations)
            .await?;

        info!(registration_id = %registration.id, username, "Registration submitted");
        Ok(registration)
    }
}
