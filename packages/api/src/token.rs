//! # Bearer token claims
//!
//! The backend issues a JWT at login. The client reads the payload segment to
//! learn the user's id and role and never verifies the signature: the claims
//! are display hints, and the backend checks the token on every request that
//! matters.
//!
//! The payload is the middle of the three dot-separated segments, base64url
//! encoded JSON. Padding is tolerated. `id` may be a JSON string or number,
//! `role` must be `applicant` or `employer`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use store::Role;

use crate::error::ApiError;

/// Claims the client cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub id: String,
    pub role: Role,
    /// Expiry (seconds since the epoch), if the token carries one. Not
    /// enforced client-side.
    pub exp: Option<u64>,
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<u64>,
}

/// Decode the claims of a JWT without verifying it.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ApiError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::malformed("Invalid token received from server"));
    }

    let payload = parts[1].trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ApiError::malformed("Invalid token received from server"))?;
    let raw: RawClaims = serde_json::from_slice(&decoded)
        .map_err(|_| ApiError::malformed("Invalid token received from server"))?;

    let id = match raw.id {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(ApiError::malformed("Token is missing the user id")),
    };
    let role = raw
        .role
        .ok_or_else(|| ApiError::malformed("Token is missing the user role"))?
        .parse::<Role>()
        .map_err(|e| ApiError::malformed(format!("Token carries an {e}")))?;

    Ok(TokenClaims {
        id,
        role,
        exp: raw.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decodes_string_id_and_role() {
        let token = token_with(r#"{"id":"64f0c2","role":"employer","exp":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.id, "64f0c2");
        assert_eq!(claims.role, Role::Employer);
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let token = token_with(r#"{"id":17,"role":"applicant"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.id, "17");
        assert_eq!(claims.role, Role::Applicant);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let token = format!(
            "h.{}.s",
            URL_SAFE.encode(r#"{"id":"a","role":"applicant"}"#)
        );
        assert_eq!(decode_claims(&token).unwrap().id, "a");
    }

    #[test]
    fn test_missing_role_is_malformed() {
        let token = token_with(r#"{"id":"1"}"#);
        assert!(matches!(
            decode_claims(&token),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unknown_role_is_malformed() {
        let token = token_with(r#"{"id":"1","role":"admin"}"#);
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn test_not_a_jwt() {
        assert!(decode_claims("opaque-token").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
    }
}
