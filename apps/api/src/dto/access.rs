use propdesk_domain::RouteRule;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a route access check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-request.ts"
)]
pub struct AccessCheckRequest {
    pub path: String,
}

/// Route access decision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-response.ts"
)]
pub struct AccessCheckResponse {
    pub path: String,
    pub allowed: bool,
    pub fallback_path: String,
}

/// Incoming payload for an any-of permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-request.ts"
)]
pub struct PermissionCheckRequest {
    pub required: Vec<String>,
}

/// Permission check decision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-response.ts"
)]
pub struct PermissionCheckResponse {
    pub allowed: bool,
}

/// API representation of a route rule.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/route-rule-response.ts"
)]
pub struct RouteRuleResponse {
    pub base_path: String,
    pub admin_only: bool,
    pub required_any: Vec<String>,
}

impl From<&RouteRule> for RouteRuleResponse {
    fn from(value: &RouteRule) -> Self {
        Self {
            base_path: value.base_path().to_owned(),
            admin_only: value.is_admin_only(),
            required_any: value
                .required_any()
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
        }
    }
}
