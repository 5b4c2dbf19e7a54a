mod cors;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use propdesk_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let session_routes = Router::new()
        .route(
            "/api/access/check",
            post(handlers::access::check_access_handler),
        )
        .route(
            "/api/access/permissions/check",
            post(handlers::access::check_permissions_handler),
        )
        .route(
            "/api/navigation",
            get(handlers::navigation::navigation_handler),
        )
        .route_layer(from_fn(middleware::attach_session));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/access/routes",
            get(handlers::access::list_route_rules_handler),
        )
        .route(
            "/api/notifications/route",
            post(handlers::notifications::resolve_notification_route_handler),
        )
        .route(
            "/api/notifications/routes",
            post(handlers::notifications::resolve_notification_routes_handler),
        )
        .merge(session_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
