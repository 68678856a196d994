//! Pending registration entity awaiting administrator action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a submitted registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Submitted, not yet reviewed
    Pending,
    /// Accepted by an administrator
    Approved,
    /// Declined by an administrator
    Rejected,
}

/// Registration record stored in the `pendingRegistrations` collection
///
/// No referential link to a User record is maintained; approval inserts a
/// separate User entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRegistration {
    /// Opaque identifier
    pub id: String,

    /// Requested account name, matched case-insensitively during recovery
    pub username: String,

    /// Phone number, compared verbatim
    pub phone_number: String,

    /// Requested password, stored as plaintext like the user records
    pub password: String,

    /// Review status
    pub status: RegistrationStatus,

    /// Timestamp when the registration was submitted
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    /// Creates a new registration in the `pending` state
    pub fn new(
        username: impl Into<String>,
        phone_number: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            phone_number: phone_number.into(),
            password: password.into(),
            status: RegistrationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Marks the registration as approved
    pub fn approve(&mut self) {
        self.status = RegistrationStatus::Approved;
    }

    /// Marks the registration as rejected
    pub fn reject(&mut self) {
        self.status = RegistrationStatus::Rejected;
    }

    /// Checks if the registration is still awaiting review
    pub fn is_pending(&self) -> bool {
        self.status == RegistrationStatus::Pending
    }

    /// Checks if the registration was rejected
    pub fn is_rejected(&self) -> bool {
        self.status == RegistrationStatus::Rejected
    }
}
