use std::collections::BTreeMap;

use propdesk_core::NonEmptyString;
use serde::{Deserialize, Serialize};

/// Scalar value carried in notification metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(serde_json::Number),
    /// JSON string.
    String(String),
}

impl MetadataValue {
    /// Returns the string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Notification fields consulted when computing a navigation target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRouteInput {
    /// Deep link attached by the backend.
    #[serde(default)]
    pub action_url: Option<String>,
    /// Free-form notification metadata.
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, MetadataValue>>,
    /// Identifier of the entity the notification is about.
    #[serde(default)]
    pub related_id: Option<String>,
    /// Model name of the entity the notification is about.
    #[serde(default)]
    pub related_model: Option<String>,
}

impl NotificationRouteInput {
    /// Returns the trimmed action URL when it is not blank.
    #[must_use]
    pub fn action_url(&self) -> Option<NonEmptyString> {
        self.action_url.as_deref().and_then(NonEmptyString::from_trimmed)
    }

    /// Returns a trimmed, non-blank string metadata entry.
    #[must_use]
    pub fn metadata_string(&self, key: &str) -> Option<NonEmptyString> {
        self.metadata
            .as_ref()?
            .get(key)?
            .as_str()
            .and_then(NonEmptyString::from_trimmed)
    }

    /// Returns the related id when the related model is exactly `model`.
    #[must_use]
    pub fn related_id_for(&self, model: &str) -> Option<NonEmptyString> {
        if self.related_model.as_deref() != Some(model) {
            return None;
        }

        self.related_id.as_deref().and_then(NonEmptyString::from_trimmed)
    }
}
