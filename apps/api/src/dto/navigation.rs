use propdesk_domain::NavigationSection;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Query parameters for the navigation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    pub requested_path: Option<String>,
}

/// API representation of a sidebar section.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-section-response.ts"
)]
pub struct NavigationSectionResponse {
    pub key: String,
    pub label: String,
    pub path: String,
}

impl From<NavigationSection> for NavigationSectionResponse {
    fn from(value: NavigationSection) -> Self {
        Self {
            key: value.key().to_owned(),
            label: value.label().to_owned(),
            path: value.path().to_owned(),
        }
    }
}

/// Sidebar sections visible to the caller.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-response.ts"
)]
pub struct NavigationResponse {
    #[ts(type = "\"admin\" | \"manager\"")]
    pub user_type: String,
    pub sections: Vec<NavigationSectionResponse>,
    pub landing_path: Option<String>,
}
