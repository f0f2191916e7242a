//! Reversible session token codec.
//!
//! A token is the base64 encoding of `{"userId": <id>, "timestamp": <unix
//! millis>}`. It is an *opaque encoding*, not a signed credential: anyone
//! holding a token can decode it, and anyone who knows the shape can forge
//! one for any user id. This is the product's documented security model,
//! kept as-is rather than silently hardened.

use base64ct::{Base64, Encoding};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

/// Payload embedded in a token. Only `userId` matters at resolution time;
/// the timestamp records the issuance instant and is never checked.
#[derive(Deserialize, Debug)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    #[allow(dead_code)]
    timestamp: i64,
}

/// Encode a user id into a bearer token.
#[must_use]
pub fn issue(user_id: &str) -> String {
    let payload = json!({
        "userId": user_id,
        "timestamp": Utc::now().timestamp_millis(),
    });

    Base64::encode_string(payload.to_string().as_bytes())
}

/// Decode a token back into the embedded user id.
///
/// Returns `None` for anything structurally invalid: bad base64, bytes
/// that are not JSON, or JSON without the expected fields. Resolution is
/// not time-bound and does not consult the user store.
#[must_use]
pub fn resolve(token: &str) -> Option<String> {
    let bytes = Base64::decode_vec(token).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    Some(claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_user_id() {
        let token = issue("01JGX5T9GVB2Q4R8W0YDM3NHAZ");
        assert_eq!(resolve(&token).as_deref(), Some("01JGX5T9GVB2Q4R8W0YDM3NHAZ"));
    }

    #[test]
    fn resolution_ignores_timestamp() {
        // Two payloads for the same user with different timestamps both
        // resolve to the same id.
        let old = Base64::encode_string(br#"{"userId":"abc","timestamp":0}"#);
        let recent = issue("abc");

        assert_eq!(resolve(&old).as_deref(), Some("abc"));
        assert_eq!(resolve(&recent).as_deref(), Some("abc"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(resolve("garbage").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn rejects_truncated_encoding() {
        let token = issue("abc");
        let truncated = &token[..token.len() / 2];
        assert!(resolve(truncated).is_none());
    }

    #[test]
    fn rejects_base64_of_non_json() {
        let token = Base64::encode_string(b"not json at all");
        assert!(resolve(&token).is_none());
    }

    #[test]
    fn rejects_json_without_user_id() {
        let token = Base64::encode_string(br#"{"timestamp":123}"#);
        assert!(resolve(&token).is_none());
    }
}
