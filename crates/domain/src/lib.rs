//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod navigation;
mod notification;
mod route;
mod security;

pub use navigation::NavigationSection;
pub use notification::{MetadataValue, NotificationRouteInput};
pub use route::{RouteRule, RouteTable};
pub use security::{Permission, PermissionSet, UserType};
