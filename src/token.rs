//! Token payload decoding.
//!
//! Reads the claims carried inside a JWT without verifying its signature.
//! Decoded claims are display and convenience data only - the authoritative
//! check is always the server's own rejection of expired or invalid tokens
//! on protected endpoints.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims of interest from a token payload. Every field is optional:
/// tokens from the backend carry only `sub` and `exp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject, conventionally the account email
    pub sub: Option<String>,
    /// Expiry, seconds since the Unix epoch
    pub exp: Option<i64>,
    /// Optional internal identifier claim
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Alternate identifier claim
    pub id: Option<String>,
}

impl Claims {
    /// Identifier priority used across the client: `userId`, then `id`,
    /// then `sub`.
    pub fn preferred_user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or(self.id.as_deref())
            .or(self.sub.as_deref())
    }
}

/// Decode the payload segment of a token. Best-effort: any structural
/// problem (missing segment, bad base64, invalid JSON) yields `None`,
/// never an error.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    // JWT segments are unpadded base64url; tolerate padded input anyway
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // payload: {"sub":"a@b.com","exp":9999999999}
    const TOKEN: &str = "header.eyJzdWIiOiJhQGIuY29tIiwiZXhwIjo5OTk5OTk5OTk5fQ.sig";

    #[test]
    fn test_decode_claims() {
        let claims = decode_claims(TOKEN).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
        assert_eq!(claims.exp, Some(9999999999));
        assert!(claims.user_id.is_none());
        assert!(claims.id.is_none());
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let padded = "header.eyJzdWIiOiJhQGIuY29tIiwiZXhwIjo5OTk5OTk5OTk5fQ==.sig";
        let claims = decode_claims(padded).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_decode_missing_segment() {
        assert!(decode_claims("notatoken").is_none());
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(decode_claims("header.!!not-base64!!.sig").is_none());
    }

    #[test]
    fn test_decode_invalid_json() {
        // payload: "plain text, not an object"
        let token = format!(
            "header.{}.sig",
            URL_SAFE_NO_PAD.encode(b"plain text, not an object")
        );
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn test_preferred_user_id_priority() {
        let claims = Claims {
            sub: Some("a@b.com".to_string()),
            user_id: Some("uid".to_string()),
            id: Some("id".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.preferred_user_id(), Some("uid"));

        let claims = Claims {
            sub: Some("a@b.com".to_string()),
            id: Some("id".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.preferred_user_id(), Some("id"));

        let claims = Claims {
            sub: Some("a@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.preferred_user_id(), Some("a@b.com"));

        assert_eq!(Claims::default().preferred_user_id(), None);
    }
}
