use std::collections::BTreeMap;

use propdesk_domain::{MetadataValue, NotificationRouteInput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use ts_rs::TS;

/// Notification fields used to compute a console route.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/notification-route-request.ts"
)]
pub struct NotificationRouteRequest {
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub related_id: Option<String>,
    #[serde(default)]
    pub related_model: Option<String>,
}

impl From<NotificationRouteRequest> for NotificationRouteInput {
    fn from(value: NotificationRouteRequest) -> Self {
        Self {
            action_url: value.action_url,
            metadata: value.metadata.map(scalar_metadata),
            related_id: value.related_id,
            related_model: value.related_model,
        }
    }
}

// Nested arrays and objects are never consulted for routing.
fn scalar_metadata(metadata: Map<String, Value>) -> BTreeMap<String, MetadataValue> {
    metadata
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => MetadataValue::Null,
                Value::Bool(value) => MetadataValue::Bool(value),
                Value::Number(value) => MetadataValue::Number(value),
                Value::String(value) => MetadataValue::String(value),
                Value::Array(_) | Value::Object(_) => {
                    debug!(key = %key, "dropping non-scalar notification metadata");
                    return None;
                }
            };
            Some((key, value))
        })
        .collect()
}

/// Resolved console route for a notification.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/notification-route-response.ts"
)]
pub struct NotificationRouteResponse {
    pub route: Option<String>,
}

/// Batch of notifications to route, as rendered by the notification list.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/notification-routes-request.ts"
)]
pub struct NotificationRoutesRequest {
    pub notifications: Vec<NotificationRouteRequest>,
}

/// Routes in the same order as the submitted notifications.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/notification-routes-response.ts"
)]
pub struct NotificationRoutesResponse {
    pub routes: Vec<Option<String>>,
}

#[cfg(test)]
mod tests {
    use propdesk_domain::{MetadataValue, NotificationRouteInput};
    use serde_json::json;

    use super::NotificationRouteRequest;

    #[test]
    fn nested_metadata_values_are_dropped() {
        let request: NotificationRouteRequest = serde_json::from_value(json!({
            "actionUrl": "/chat",
            "metadata": {
                "conversationId": "c1",
                "participants": ["a", "b"],
                "context": {"source": "bell"},
                "unread": 2
            }
        }))
        .unwrap_or_default();

        let input = NotificationRouteInput::from(request);
        let metadata = input.metadata.clone().unwrap_or_default();

        assert_eq!(input.action_url.as_deref(), Some("/chat"));
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("conversationId"), Some(&MetadataValue::from("c1")));
        assert!(metadata.get("participants").is_none());
    }
}
