//! Bearer token gate for protected endpoints.

use crate::auth::token;
use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Resolve the identity carried by the request's `Authorization` header.
///
/// The scheme prefix must be exactly `"Bearer "` (case-sensitive, single
/// space). A missing header, wrong scheme, missing token segment or
/// unresolvable token all yield `None`; callers answer 401 with the
/// uniform "invalid token" message so the failing check is not leaked.
///
/// The resolved id is *not* checked against the user store: a token for a
/// since-deleted user still authorizes. Current behavior, kept as-is.
#[must_use]
pub fn authorize(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let bearer = value.strip_prefix("Bearer ")?;

    token::resolve(bearer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(value).expect("header value"),
        );
        headers
    }

    #[test]
    fn resolves_issued_token() {
        let token = token::issue("user-1");
        let headers = headers_with(&format!("Bearer {token}"));
        assert_eq!(authorize(&headers).as_deref(), Some("user-1"));
    }

    #[test]
    fn rejects_missing_header() {
        assert!(authorize(&HeaderMap::new()).is_none());
    }

    #[test]
    fn rejects_lowercase_scheme() {
        let token = token::issue("user-1");
        let headers = headers_with(&format!("bearer {token}"));
        assert!(authorize(&headers).is_none());
    }

    #[test]
    fn rejects_missing_token_segment() {
        assert!(authorize(&headers_with("Bearer ")).is_none());
        assert!(authorize(&headers_with("Bearer")).is_none());
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(authorize(&headers_with("Bearer garbage")).is_none());
    }
}
