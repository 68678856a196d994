//! Admin console operations implementation

use std::sync::Arc;

use rd_shared::utils::validation::validators;
use tracing::info;

use crate::domain::entities::page::Page;
use crate::domain::entities::registration::PendingRegistration;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::stats::DirectoryStats;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{PageRepository, RegistrationRepository, UserRepository};

/// Admin console service over the three store-backed collections
pub struct AdminService<U, R, P>
where
    U: UserRepository,
    R: RegistrationRepository,
    P: PageRepository,
{
    /// Approved account directory
    user_repository: Arc<U>,
    /// Pending registration collection
    registration_repository: Arc<R>,
    /// Dashboard page collection
    page_repository: Arc<P>,
}

impl<U, R, P> AdminService<U, R, P>
where
    U: UserRepository,
    R: RegistrationRepository,
    P: PageRepository,
{
    /// Create a new admin service
    pub fn new(
        user_repository: Arc<U>,
        registration_repository: Arc<R>,
        page_repository: Arc<P>,
    ) -> Self {
        Self {
            user_repository,
            registration_repository,
            page_repository,
        }
    }

    // --- users ---

    /// List the user collection in stored order
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.load_all().await
    }

    /// Append a user record to the directory
    ///
    /// Identifier uniqueness is assumed, never enforced; only the display
    /// name and email shape are checked.
    pub async fn create_user(&self, user: User) -> DomainResult<User> {
        if !validators::not_empty(&user.name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !user.email.is_empty() && !validators::is_valid_email(&user.email) {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            }
            .into());
        }

        let mut users = self.user_repository.load_all().await?;
        users.push(user.clone());
        self.user_repository.save_all(&users).await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Replace the user record with the same identifier
    pub async fn update_user(&self, user: User) -> DomainResult<User> {
        let mut users = self.user_repository.load_all().await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;
        *slot = user.clone();
        self.user_repository.save_all(&users).await?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Remove a user record by identifier
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - No record carried the identifier
    pub async fn delete_user(&self, id: &str) -> DomainResult<bool> {
        let mut users = self.user_repository.load_all().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.user_repository.save_all(&users).await?;

        info!(user_id = %id, "User deleted");
        Ok(true)
    }

    // --- registrations ---

    /// List the pending registration collection in stored order
    pub async fn list_registrations(&self) -> DomainResult<Vec<PendingRegistration>> {
        self.registration_repository.load_all().await
    }

    /// Approve a pending registration and insert the matching user record
    ///
    /// The new account gets the `viewer` role and carries the registration's
    /// phone number and password. The registration itself stays in its
    /// collection with status `approved`.
    pub async fn approve_registration(&self, id: &str) -> DomainResult<User> {
        let mut registrations = self.registration_repository.load_all().await?;
        let registration = registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound {
                resource: "PendingRegistration".to_string(),
            })?;

        if !registration.is_pending() {
            return Err(ValidationError::BusinessRuleViolation {
                rule: "Only pending registrations can be approved".to_string(),
            }
            .into());
        }

        registration.approve();
        let user = User::new(
            registration.username.clone(),
            String::new(),
            registration.password.clone(),
            Role::Viewer,
        )
        .with_phone_number(registration.phone_number.clone());
        let registration_id = registration.id.clone();

        self.registration_repository
            .save_all(&registrations)
            .await?;

        let mut users = self.user_repository.load_all().await?;
        users.push(user.clone());
        self.user_repository.save_all(&users).await?;

        info!(
            registration_id = %registration_id,
            user_id = %user.id,
            "Registration approved"
        );
        Ok(user)
    }

    /// Reject a pending registration
    pub async fn reject_registration(&self, id: &str) -> DomainResult<()> {
        let mut registrations = self.registration_repository.load_all().await?;
        let registration = registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound {
                resource: "PendingRegistration".to_string(),
            })?;

        if !registration.is_pending() {
            return Err(ValidationError::BusinessRuleViolation {
                rule: "Only pending registrations can be rejected".to_string(),
            }
            .into());
        }

        registration.reject();
        let registration_id = registration.id.clone();
        self.registration_repository
            .save_all(&registrations)
            .await?;

        info!(registration_id = %registration_id, "Registration rejected");
        Ok(())
    }

    // --- pages ---

    /// List the page collection in stored order
    pub async fn list_pages(&self) -> DomainResult<Vec<Page>> {
        self.page_repository.load_all().await
    }

    /// Append a page record to the collection
    pub async fn create_page(&self, page: Page) -> DomainResult<Page> {
        if !validators::not_empty(&page.title) {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into());
        }

        let mut pages = self.page_repository.load_all().await?;
        pages.push(page.clone());
        self.page_repository.save_all(&pages).await?;

        info!(page_id = %page.id, "Page created");
        Ok(page)
    }

    /// Replace the page record with the same identifier
    pub async fn update_page(&self, page: Page) -> DomainResult<Page> {
        let mut pages = self.page_repository.load_all().await?;
        let slot = pages
            .iter_mut()
            .find(|p| p.id == page.id)
            .ok_or_else(|| DomainError::NotFound {
                resource: "Page".to_string(),
            })?;
        *slot = page.clone();
        self.page_repository.save_all(&pages).await?;

        info!(page_id = %page.id, "Page updated");
        Ok(page)
    }

    /// Remove a page record by identifier
    pub async fn delete_page(&self, id: &str) -> DomainResult<bool> {
        let mut pages = self.page_repository.load_all().await?;
        let before = pages.len();
        pages.retain(|p| p.id != id);
        if pages.len() == before {
            return Ok(false);
        }
        self.page_repository.save_all(&pages).await?;

        info!(page_id = %id, "Page deleted");
        Ok(true)
    }

    // --- stats ---

    /// Aggregate counts shown on the admin console landing view
    pub async fn stats(&self) -> DomainResult<DirectoryStats> {
        let pages = self.page_repository.load_all().await?;
        let users = self.user_repository.load_all().await?;

        Ok(DirectoryStats {
            total_pages: pages.len() as u64,
            total_users: users.len() as u64,
            admin_users: users.iter().filter(|u| u.is_admin()).count() as u64,
            viewer_users: users.iter().filter(|u| u.is_viewer()).count() as u64,
        })
    }
}
