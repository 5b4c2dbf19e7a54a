use axum::Json;
use axum::extract::{Extension, Query, State};
use propdesk_application::SessionContext;

use crate::dto::{NavigationQuery, NavigationResponse, NavigationSectionResponse};
use crate::state::AppState;

pub async fn navigation_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let sections = state
        .navigation_service
        .visible_sections(&session)
        .into_iter()
        .map(NavigationSectionResponse::from)
        .collect();

    let landing_path = query.requested_path.as_deref().map(|requested_path| {
        state
            .navigation_service
            .landing_path(&session, requested_path)
            .to_owned()
    });

    Json(NavigationResponse {
        user_type: session.user_type().as_str().to_owned(),
        sections,
        landing_path,
    })
}
