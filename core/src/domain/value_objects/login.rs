//! Login response value object and landing route derivation.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{Role, User};

/// Landing route for administrator accounts
pub const ADMIN_ROUTE: &str = "/admin";

/// Landing route for developer accounts
pub const DEVELOPER_ROUTE: &str = "/developer";

/// Landing route when an account has no assigned pages
pub const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard/performance";

/// Derive the landing route for a matched record
///
/// Administrators and developers land on their fixed consoles; everyone else
/// lands on their first assigned page, falling back to the default dashboard.
pub fn landing_route(role: Role, first_assigned_page: Option<&str>) -> String {
    match role {
        Role::Admin => ADMIN_ROUTE.to_string(),
        Role::Developer => DEVELOPER_ROUTE.to_string(),
        Role::Viewer => match first_assigned_page {
            Some(page_id) => format!("/dashboard/{}", page_id),
            None => DEFAULT_DASHBOARD_ROUTE.to_string(),
        },
    }
}

/// Successful login result handed back to the calling flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Identifier of the matched record
    pub user_id: String,

    /// Display name of the matched record
    pub username: String,

    /// Role of the matched record
    pub role: Role,

    /// Landing route derived from the role and assigned pages
    pub redirect: String,
}

impl LoginResponse {
    /// Builds the response for a matched directory record
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.name.clone(),
            role: user.role,
            redirect: landing_route(user.role, user.first_assigned_page()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_route_per_role() {
        assert_eq!(landing_route(Role::Admin, None), "/admin");
        assert_eq!(landing_route(Role::Developer, None), "/developer");
        assert_eq!(
            landing_route(Role::Viewer, Some("ops")),
            "/dashboard/ops"
        );
        assert_eq!(landing_route(Role::Viewer, None), "/dashboard/performance");
    }

    #[test]
    fn test_admin_route_wins_over_assigned_pages() {
        // Assigned pages are ignored for admin and developer accounts
        assert_eq!(landing_route(Role::Admin, Some("ops")), "/admin");
        assert_eq!(landing_route(Role::Developer, Some("ops")), "/developer");
    }

    #[test]
    fn test_response_for_user() {
        let user = User::new("alice", "alice@example.com", "pw", Role::Viewer)
            .with_assigned_pages(vec!["finance".to_string()]);
        let response = LoginResponse::for_user(&user);

        assert_eq!(response.user_id, user.id);
        assert_eq!(response.username, "alice");
        assert_eq!(response.redirect, "/dashboard/finance");
    }
}
