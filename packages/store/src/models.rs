//! # Session models
//!
//! Defines the client-held identity that the rest of the workspace passes around.
//! These types are `Serialize + Deserialize` because the [`Session`] is written
//! verbatim to client storage (key [`crate::USER_KEY`]) and read back on the
//! next start.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | `applicant` or `employer`. Serialised lowercase, matching the token claim and the registration payload. |
//! | [`Session`] | The signed-in user: id and role from the decoded token, email and username from the login response, plus the raw bearer token. |
//!
//! The role on a stored session is a display hint. It decides which navigation
//! entries and pages are offered, never what the backend allows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two kinds of TalentHub account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Applicant,
    Employer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Employer => "employer",
        }
    }

    /// Label used in the registration form.
    pub fn label(self) -> &'static str {
        match self {
            Role::Applicant => "Applicant",
            Role::Employer => "Employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applicant" => Ok(Role::Applicant),
            "employer" => Ok(Role::Employer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// The authenticated user as the client remembers it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn is_applicant(&self) -> bool {
        self.role == Role::Applicant
    }

    pub fn is_employer(&self) -> bool {
        self.role == Role::Employer
    }

    /// Get display name, falling back to email if the username is blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}
