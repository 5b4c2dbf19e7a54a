use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use propdesk_application::SessionContext;
use propdesk_core::AppError;
use tracing::warn;

use crate::error::{ApiError, ApiResult};

/// Header carrying the console user type (`admin` or `manager`).
pub const USER_TYPE_HEADER: &str = "x-user-type";
/// Header carrying comma-separated permission tokens.
pub const USER_PERMISSIONS_HEADER: &str = "x-user-permissions";

pub async fn attach_session(mut request: Request, next: Next) -> ApiResult<Response> {
    let session = session_from_headers(request.headers())?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

pub(crate) fn session_from_headers(headers: &HeaderMap) -> ApiResult<SessionContext> {
    let user_type = header_str(headers, USER_TYPE_HEADER)?;
    let permissions = header_str(headers, USER_PERMISSIONS_HEADER)?.unwrap_or_default();

    let (session, unknown) = SessionContext::from_transport(
        user_type,
        permissions
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty()),
    );

    if !unknown.is_empty() {
        warn!(?unknown, "ignoring unknown permission tokens");
    }

    Ok(session)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> ApiResult<Option<&'a str>> {
    headers
        .get(name)
        .map(|value| {
            value.to_str().map_err(|error| {
                ApiError::from(AppError::Validation(format!(
                    "invalid {name} header: {error}"
                )))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};
    use propdesk_domain::{Permission, UserType};

    use super::{USER_PERMISSIONS_HEADER, USER_TYPE_HEADER, session_from_headers};

    #[test]
    fn missing_headers_resolve_to_admin() {
        let session = session_from_headers(&HeaderMap::new());
        assert!(session.is_ok());

        let session = session.unwrap_or_else(|_| unreachable!());
        assert_eq!(session.user_type(), UserType::Admin);
        assert!(session.permissions().is_empty());
    }

    #[test]
    fn manager_headers_are_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_TYPE_HEADER, HeaderValue::from_static("manager"));
        headers.insert(
            USER_PERMISSIONS_HEADER,
            HeaderValue::from_static("broker:read, message:read,,bogus"),
        );

        let session = session_from_headers(&headers).unwrap_or_else(|_| unreachable!());

        assert_eq!(session.user_type(), UserType::Manager);
        assert!(session.permissions().contains(Permission::BrokerRead));
        assert!(session.permissions().contains(Permission::MessageRead));
        assert_eq!(session.permissions().len(), 2);
    }

    #[test]
    fn opaque_header_is_rejected() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes(&[0xE2, 0x82]);
        assert!(value.is_ok());
        headers.insert(USER_TYPE_HEADER, value.unwrap_or_else(|_| unreachable!()));

        assert!(session_from_headers(&headers).is_err());
    }
}
