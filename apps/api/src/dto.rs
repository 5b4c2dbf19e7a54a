mod access;
mod navigation;
mod notifications;

use serde::Serialize;
use ts_rs::TS;

pub use access::{
    AccessCheckRequest, AccessCheckResponse, PermissionCheckRequest, PermissionCheckResponse,
    RouteRuleResponse,
};
pub use navigation::{NavigationQuery, NavigationResponse, NavigationSectionResponse};
pub use notifications::{
    NotificationRouteRequest, NotificationRouteResponse, NotificationRoutesRequest,
    NotificationRoutesResponse,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
