use propdesk_domain::{Permission, PermissionSet, RouteTable, UserType};

use crate::SessionContext;

/// Landing path every authenticated user type may open.
pub const FALLBACK_PATH: &str = "/";

/// Route authorization over a route table.
///
/// A missing user type is treated as an administrator. Paths without a
/// governing rule are denied to managers.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    routes: RouteTable,
}

impl AccessPolicy {
    /// Creates a policy over a custom route table.
    #[must_use]
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Creates a policy over the built-in console route table.
    #[must_use]
    pub fn admin_console() -> Self {
        Self::new(RouteTable::admin_console().clone())
    }

    /// Returns the route table backing this policy.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Returns whether the caller may open `path`.
    #[must_use]
    pub fn can_access_path(
        &self,
        path: &str,
        user_type: Option<UserType>,
        permissions: &PermissionSet,
    ) -> bool {
        if user_type.unwrap_or_default().is_admin() || path == FALLBACK_PATH {
            return true;
        }

        let Some(rule) = self.routes.match_path(path) else {
            return false;
        };

        if rule.is_admin_only() {
            return false;
        }

        rule.required_any().is_empty() || permissions.contains_any(rule.required_any())
    }

    /// Returns whether the session may open `path`.
    #[must_use]
    pub fn can_session_access(&self, session: &SessionContext, path: &str) -> bool {
        self.can_access_path(path, Some(session.user_type()), session.permissions())
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::admin_console()
    }
}

/// Returns whether the caller may open `path` in the admin console.
#[must_use]
pub fn can_access_path(
    path: &str,
    user_type: Option<UserType>,
    permissions: &PermissionSet,
) -> bool {
    AccessPolicy::admin_console().can_access_path(path, user_type, permissions)
}

/// Returns whether the caller holds `permission`. Administrators hold all.
#[must_use]
pub fn has_permission(
    user_type: Option<UserType>,
    permissions: &PermissionSet,
    permission: Permission,
) -> bool {
    user_type.unwrap_or_default().is_admin() || permissions.contains(permission)
}

/// Returns whether the caller holds at least one of `required`.
#[must_use]
pub fn has_any_permission(
    user_type: Option<UserType>,
    permissions: &PermissionSet,
    required: &[Permission],
) -> bool {
    user_type.unwrap_or_default().is_admin() || permissions.contains_any(required)
}

/// Returns the path part of a location, without query string or fragment.
#[must_use]
pub fn route_path(location: &str) -> &str {
    location.split(['?', '#']).next().unwrap_or(location)
}

/// Returns the landing path for users who cannot open what they asked for.
#[must_use]
pub fn fallback_path_for_user() -> &'static str {
    FALLBACK_PATH
}
