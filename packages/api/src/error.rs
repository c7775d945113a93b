//! Error taxonomy for calls against the TalentHub backend.

use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong while talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http {
        status: u16,
        /// The body's `message` field, when it had one.
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered successfully but not with what was expected.
    #[error("{0}")]
    MalformedResponse(String),

    /// The configured base URL cannot be turned into an endpoint.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// A call that needs a bearer token was made without a session.
    #[error("You need to be logged in to do that")]
    NotSignedIn,
}

/// Shape of the backend's error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and raw body, pulling out the
    /// `message` field when the body is JSON.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        ApiError::Http { status, message }
    }

    pub fn malformed(what: impl Into<String>) -> Self {
        ApiError::MalformedResponse(what.into())
    }

    /// Text to show the user: the server's own message when it sent one, the
    /// description of a malformed response, otherwise `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::MalformedResponse(what) => what.clone(),
            ApiError::NotSignedIn => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::MalformedResponse(format!("Unexpected response from server: {e}"))
        } else if let Some(status) = e.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
