use propdesk_core::NonEmptyString;
use propdesk_domain::NotificationRouteInput;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

const MESSAGES_PATH: &str = "/messages";
const ENQUIRIES_PATH: &str = "/enquiries";
const LEGACY_CHAT_PATH: &str = "/chat";
const CONVERSATION_PARAM: &str = "conversationId";
const CONVERSATION_METADATA_KEY: &str = "conversationId";
const ENQUIRY_METADATA_KEY: &str = "enquiryId";
const CONVERSATION_MODEL: &str = "Conversation";
const ENQUIRY_MODEL: &str = "Enquiry";
// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
const DOT_SEGMENT: &AsciiSet = &PATH_SEGMENT.add(b'.');

/// Resolves the console path a notification should open.
///
/// Legacy `/chat` deep links are rewritten to `/messages`, and message links
/// gain a `conversationId` query parameter when one can be derived from the
/// notification. Returns `None` when no sensible target exists.
#[must_use]
pub fn resolve_admin_notification_route(notification: &NotificationRouteInput) -> Option<String> {
    let conversation_id = notification
        .metadata_string(CONVERSATION_METADATA_KEY)
        .or_else(|| notification.related_id_for(CONVERSATION_MODEL));

    if let Some(action_url) = notification.action_url() {
        return Some(rewrite_action_url(
            action_url.as_str(),
            conversation_id.as_ref(),
        ));
    }

    if let Some(conversation_id) = conversation_id {
        return Some(messages_route(Some(conversation_id.as_str())));
    }

    let enquiry_id = notification
        .metadata_string(ENQUIRY_METADATA_KEY)
        .or_else(|| notification.related_id_for(ENQUIRY_MODEL))?;

    Some(enquiry_route(enquiry_id.as_str()))
}

fn rewrite_action_url(action_url: &str, conversation_id: Option<&NonEmptyString>) -> String {
    if let Some(legacy_id) = legacy_chat_id(action_url) {
        return messages_route(Some(legacy_id));
    }

    if is_bare_chat_path(action_url) {
        return messages_route(conversation_id.map(NonEmptyString::as_str));
    }

    match conversation_id {
        Some(conversation_id) if action_url.starts_with(MESSAGES_PATH) => {
            with_conversation_param(action_url, conversation_id.as_str())
        }
        _ => action_url.to_owned(),
    }
}

/// Extracts `<id>` from `/chat/<id>`; `chat` is matched case-insensitively.
fn legacy_chat_id(action_url: &str) -> Option<&str> {
    let rest = strip_prefix_ignore_ascii_case(action_url, LEGACY_CHAT_PATH)?.strip_prefix('/')?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let id = &rest[..end];

    (!id.is_empty()).then_some(id)
}

fn is_bare_chat_path(action_url: &str) -> bool {
    matches!(
        strip_prefix_ignore_ascii_case(action_url, LEGACY_CHAT_PATH),
        Some("" | "/")
    )
}

fn strip_prefix_ignore_ascii_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

/// Builds `/messages`, optionally scoped to a conversation.
///
/// The id is form-encoded (a space becomes `+`), the same serialization used
/// when a query string is rebuilt in [`with_conversation_param`].
fn messages_route(conversation_id: Option<&str>) -> String {
    match conversation_id {
        Some(conversation_id) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(CONVERSATION_PARAM, conversation_id)
                .finish();
            format!("{MESSAGES_PATH}?{query}")
        }
        None => MESSAGES_PATH.to_owned(),
    }
}

/// Adds `conversationId` to a `/messages` link unless it already carries one.
///
/// Existing parameters keep their order; a fragment is kept after the query.
fn with_conversation_param(action_url: &str, conversation_id: &str) -> String {
    let (without_fragment, fragment) = match action_url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (action_url, None),
    };
    let (path, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut pairs: Vec<(String, String)> =
        form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    if !pairs.iter().any(|(name, _)| name == CONVERSATION_PARAM) {
        pairs.push((CONVERSATION_PARAM.to_owned(), conversation_id.to_owned()));
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish();

    let mut route = path.to_owned();
    if !query.is_empty() {
        route.push('?');
        route.push_str(&query);
    }
    if let Some(fragment) = fragment {
        route.push('#');
        route.push_str(fragment);
    }

    route
}

fn enquiry_route(enquiry_id: &str) -> String {
    // `.` and `..` would be collapsed by path normalization.
    let encode_set = if matches!(enquiry_id, "." | "..") {
        DOT_SEGMENT
    } else {
        PATH_SEGMENT
    };

    format!(
        "{ENQUIRIES_PATH}/{}",
        utf8_percent_encode(enquiry_id, encode_set)
    )
}

#[cfg(test)]
mod tests;
