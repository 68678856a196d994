//! User entity representing an approved dashboard account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an approved account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to the admin console
    Admin,
    /// Read-only access to assigned dashboard pages
    Viewer,
    /// Internal account with access to the developer console
    Developer,
}

impl Role {
    /// String form used in the persisted session keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
            Role::Developer => "developer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "viewer" => Ok(Role::Viewer),
            "developer" => Ok(Role::Developer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity stored in the `adminUsers` collection
///
/// Field names follow the persisted camelCase JSON records. The `id` is an
/// opaque string whose uniqueness is assumed, never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier
    pub id: String,

    /// Display name, also accepted as a login identifier (case-insensitive)
    pub name: String,

    /// Email address, accepted as a login identifier (case-sensitive)
    pub email: String,

    /// Stored and compared as plaintext, matching the persisted records
    pub password: String,

    /// Phone number used by password recovery, compared verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Role of the account
    pub role: Role,

    /// Identifiers of the dashboard pages this account may open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_pages: Option<Vec<String>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User record with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone_number: None,
            role,
            assigned_pages: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the assigned page identifiers
    pub fn with_assigned_pages(mut self, pages: Vec<String>) -> Self {
        self.assigned_pages = Some(pages);
        self
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Checks if the user is a viewer
    pub fn is_viewer(&self) -> bool {
        self.role == Role::Viewer
    }

    /// First assigned page identifier, if any pages are assigned
    pub fn first_assigned_page(&self) -> Option<&str> {
        self.assigned_pages
            .as_ref()
            .and_then(|pages| pages.first())
            .map(String::as_str)
    }
}
