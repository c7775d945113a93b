use serde::{Deserialize, Serialize};
use store::Role;

use super::opt_id_from_any;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields returned alongside the token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Response of `POST /auth/login`. Fields are optional so a body missing them
/// is reported as a malformed response rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_sends_lowercase_role() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Employer,
        })
        .unwrap();
        assert_eq!(body["role"], "employer");
        assert_eq!(body["name"], "Grace");
    }

    #[test]
    fn test_register_response_numeric_user_id() {
        let resp: RegisterResponse = serde_json::from_str(r#"{"userId":5}"#).unwrap();
        assert_eq!(resp.user_id.as_deref(), Some("5"));
        let resp: RegisterResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(resp.user_id, None);
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let resp: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}
