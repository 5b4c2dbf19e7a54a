use std::collections::BTreeMap;

use propdesk_domain::{MetadataValue, NotificationRouteInput};

use super::resolve_admin_notification_route;

fn with_action_url(action_url: &str) -> NotificationRouteInput {
    NotificationRouteInput {
        action_url: Some(action_url.to_owned()),
        ..NotificationRouteInput::default()
    }
}

fn metadata(entries: &[(&str, MetadataValue)]) -> Option<BTreeMap<String, MetadataValue>> {
    Some(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect(),
    )
}

fn route(notification: &NotificationRouteInput) -> Option<String> {
    resolve_admin_notification_route(notification)
}

#[test]
fn legacy_chat_link_becomes_messages_link() {
    assert_eq!(
        route(&with_action_url("/chat/abc123")).as_deref(),
        Some("/messages?conversationId=abc123")
    );
}

#[test]
fn legacy_chat_match_is_case_insensitive() {
    assert_eq!(
        route(&with_action_url("/CHAT/abc123")).as_deref(),
        Some("/messages?conversationId=abc123")
    );
    assert_eq!(
        route(&with_action_url("/Chat")).as_deref(),
        Some("/messages")
    );
}

#[test]
fn legacy_chat_id_stops_at_separator() {
    assert_eq!(
        route(&with_action_url("/chat/abc?tab=info")).as_deref(),
        Some("/messages?conversationId=abc")
    );
    assert_eq!(
        route(&with_action_url("/chat/abc/details")).as_deref(),
        Some("/messages?conversationId=abc")
    );
}

#[test]
fn legacy_chat_id_is_encoded() {
    assert_eq!(
        route(&with_action_url("/chat/a b&c")).as_deref(),
        Some("/messages?conversationId=a+b%26c")
    );
}

#[test]
fn bare_chat_without_conversation_goes_to_messages() {
    assert_eq!(route(&with_action_url("/chat")).as_deref(), Some("/messages"));
    assert_eq!(route(&with_action_url("/chat/")).as_deref(), Some("/messages"));
}

#[test]
fn bare_chat_uses_metadata_conversation() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("xyz"))]),
        ..with_action_url("/chat")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=xyz")
    );
}

#[test]
fn bare_chat_uses_related_conversation() {
    let notification = NotificationRouteInput {
        related_id: Some("conv-7".to_owned()),
        related_model: Some("Conversation".to_owned()),
        ..with_action_url("/chat/")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=conv-7")
    );
}

#[test]
fn messages_link_gains_conversation_param() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c1"))]),
        ..with_action_url("/messages?foo=bar")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?foo=bar&conversationId=c1")
    );
}

#[test]
fn messages_link_keeps_existing_conversation_param() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c1"))]),
        ..with_action_url("/messages?conversationId=existing")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=existing")
    );
}

#[test]
fn messages_link_without_query_gains_param() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c1"))]),
        ..with_action_url("/messages")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=c1")
    );
}

#[test]
fn messages_link_keeps_fragment() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c1"))]),
        ..with_action_url("/messages?tab=all#latest")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?tab=all&conversationId=c1#latest")
    );
}

#[test]
fn messages_link_without_conversation_is_unchanged() {
    assert_eq!(
        route(&with_action_url("/messages?foo=bar")).as_deref(),
        Some("/messages?foo=bar")
    );
}

#[test]
fn other_action_urls_pass_through_trimmed() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c1"))]),
        ..with_action_url("  /brokers/42  ")
    };

    assert_eq!(route(&notification).as_deref(), Some("/brokers/42"));
}

#[test]
fn blank_action_url_falls_back_to_conversation() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("conversationId", MetadataValue::from("c 2"))]),
        ..with_action_url("   ")
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=c+2")
    );
}

#[test]
fn conversation_wins_over_enquiry() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[
            ("conversationId", MetadataValue::from("c1")),
            ("enquiryId", MetadataValue::from("e1")),
        ]),
        ..NotificationRouteInput::default()
    };

    assert_eq!(
        route(&notification).as_deref(),
        Some("/messages?conversationId=c1")
    );
}

#[test]
fn related_enquiry_routes_to_enquiry_detail() {
    let notification = NotificationRouteInput {
        related_id: Some("e1".to_owned()),
        related_model: Some("Enquiry".to_owned()),
        ..NotificationRouteInput::default()
    };

    assert_eq!(route(&notification).as_deref(), Some("/enquiries/e1"));
}

#[test]
fn metadata_enquiry_is_path_encoded() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[("enquiryId", MetadataValue::from("e/1 x"))]),
        ..NotificationRouteInput::default()
    };

    assert_eq!(route(&notification).as_deref(), Some("/enquiries/e%2F1%20x"));
}

#[test]
fn dot_segment_enquiry_ids_are_kept() {
    let route_for = |enquiry_id: &str| {
        route(&NotificationRouteInput {
            metadata: metadata(&[("enquiryId", MetadataValue::from(enquiry_id))]),
            ..NotificationRouteInput::default()
        })
    };

    assert_eq!(route_for("..").as_deref(), Some("/enquiries/%2E%2E"));
    assert_eq!(route_for(".").as_deref(), Some("/enquiries/%2E"));
    assert_eq!(route_for("a.b").as_deref(), Some("/enquiries/a.b"));
    assert_eq!(route_for("e~1_x-2").as_deref(), Some("/enquiries/e~1_x-2"));
}

#[test]
fn non_string_metadata_is_not_an_identifier() {
    let notification = NotificationRouteInput {
        metadata: metadata(&[
            ("conversationId", MetadataValue::Bool(true)),
            ("enquiryId", MetadataValue::Null),
        ]),
        ..NotificationRouteInput::default()
    };

    assert_eq!(route(&notification), None);
}

#[test]
fn related_id_of_other_model_is_ignored() {
    let notification = NotificationRouteInput {
        related_id: Some("b1".to_owned()),
        related_model: Some("Broker".to_owned()),
        ..NotificationRouteInput::default()
    };

    assert_eq!(route(&notification), None);
}

#[test]
fn empty_notification_has_no_route() {
    assert_eq!(route(&NotificationRouteInput::default()), None);
}
