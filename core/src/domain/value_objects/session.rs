//! Active session value object persisted by the calling flow.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::login::LoginResponse;

/// Identity recorded in the store after a successful login
///
/// Persisted under the discrete keys `userId`, `username` and `userRole`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Identifier of the logged-in account
    pub user_id: String,

    /// Display name of the logged-in account
    pub username: String,

    /// Role of the logged-in account
    pub role: Role,
}

impl Session {
    /// Session for a matched directory record
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.name.clone(),
            role: user.role,
        }
    }

    /// Session carried by a successful login response
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            user_id: response.user_id.clone(),
            username: response.username.clone(),
            role: response.role,
        }
    }
}
