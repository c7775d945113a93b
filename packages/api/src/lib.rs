//! # API crate: typed client for the TalentHub backend
//!
//! Everything the frontend knows about the remote REST API lives here: the
//! request/response shapes, the one HTTP client every page goes through, the
//! error taxonomy pages render, and the two bits of client-side logic that sit
//! next to the data (JWT claim decoding and the job search filter).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, exactly one request per call |
//! | [`config`] | [`ApiConfig`]: base URL resolution (default, compile-time and runtime overrides) |
//! | [`error`] | [`ApiError`]: HTTP / network / malformed-response / not-signed-in |
//! | [`filter`] | [`JobFilter`]: case-insensitive text search combined with an exact category match |
//! | [`models`] | Wire models (`Job`, `Application`, auth payloads) |
//! | [`token`] | Unverified JWT payload decoding for id and role |
//!
//! The session type itself ([`Session`], [`Role`]) comes from the `store`
//! crate, which owns its persistence, and is re-exported for convenience.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod token;

pub use client::{session_from_login, ApiClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use filter::{CategoryFilter, JobFilter, ALL_CATEGORIES};
pub use models::{Application, Job, NewJob, RegisterRequest};
pub use store::{Role, Session};
pub use token::{decode_claims, TokenClaims};
