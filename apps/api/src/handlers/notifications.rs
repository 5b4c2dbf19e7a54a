use axum::Json;
use propdesk_application::resolve_admin_notification_route;
use propdesk_domain::NotificationRouteInput;

use crate::dto::{
    NotificationRouteRequest, NotificationRouteResponse, NotificationRoutesRequest,
    NotificationRoutesResponse,
};

pub async fn resolve_notification_route_handler(
    Json(payload): Json<NotificationRouteRequest>,
) -> Json<NotificationRouteResponse> {
    Json(NotificationRouteResponse {
        route: route_for(payload),
    })
}

pub async fn resolve_notification_routes_handler(
    Json(payload): Json<NotificationRoutesRequest>,
) -> Json<NotificationRoutesResponse> {
    let routes = payload.notifications.into_iter().map(route_for).collect();

    Json(NotificationRoutesResponse { routes })
}

fn route_for(request: NotificationRouteRequest) -> Option<String> {
    resolve_admin_notification_route(&NotificationRouteInput::from(request))
}
