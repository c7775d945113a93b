//! Wire models for the TalentHub REST API.

mod application;
mod auth;
mod job;

pub use application::{Application, NewApplication};
pub use auth::{LoginRequest, LoginResponse, LoginUser, RegisterRequest, RegisterResponse};
pub use job::{decorate_listings, Job, NewJob, LISTING_CATEGORIES};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept ids sent as JSON strings or numbers.
pub(crate) fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Same as [`id_from_any`] for optional ids; `null` and absence map to `None`.
pub(crate) fn opt_id_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
