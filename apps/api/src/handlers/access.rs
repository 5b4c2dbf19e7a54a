use axum::Json;
use axum::extract::{Extension, State};
use propdesk_application::{SessionContext, fallback_path_for_user, has_any_permission, route_path};
use propdesk_domain::{Permission, PermissionSet};
use tracing::{debug, warn};

use crate::dto::{
    AccessCheckRequest, AccessCheckResponse, PermissionCheckRequest, PermissionCheckResponse,
    RouteRuleResponse,
};
use crate::state::AppState;

pub async fn check_access_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<AccessCheckRequest>,
) -> Json<AccessCheckResponse> {
    let allowed = state
        .access_policy()
        .can_session_access(&session, route_path(payload.path.as_str()));

    debug!(
        path = %payload.path,
        user_type = session.user_type().as_str(),
        allowed,
        "route access check"
    );

    Json(AccessCheckResponse {
        path: payload.path,
        allowed,
        fallback_path: fallback_path_for_user().to_owned(),
    })
}

pub async fn check_permissions_handler(
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<PermissionCheckRequest>,
) -> Json<PermissionCheckResponse> {
    let (required, unknown) =
        PermissionSet::from_transport_tokens(payload.required.iter().map(String::as_str));
    if !unknown.is_empty() {
        warn!(?unknown, "ignoring unknown required permission tokens");
    }

    let required: Vec<Permission> = required.iter().collect();
    let allowed = has_any_permission(
        Some(session.user_type()),
        session.permissions(),
        &required,
    );

    Json(PermissionCheckResponse { allowed })
}

pub async fn list_route_rules_handler(
    State(state): State<AppState>,
) -> Json<Vec<RouteRuleResponse>> {
    let rules = state
        .access_policy()
        .routes()
        .rules()
        .iter()
        .map(RouteRuleResponse::from)
        .collect();

    Json(rules)
}
