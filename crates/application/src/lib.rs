//! Application services for console authorization and navigation.

#![forbid(unsafe_code)]

mod access_policy;
mod navigation_service;
mod notification_routing;
mod session;

pub use access_policy::{
    AccessPolicy, FALLBACK_PATH, can_access_path, fallback_path_for_user, has_any_permission,
    has_permission, route_path,
};
pub use navigation_service::NavigationService;
pub use notification_routing::resolve_admin_notification_route;
pub use session::SessionContext;
