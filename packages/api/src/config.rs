//! Backend location for the API client.

use reqwest::Url;

use crate::error::ApiError;

/// The deployed TalentHub backend.
pub const DEFAULT_BASE_URL: &str = "https://talenthub-backend-bhrj.onrender.com";

/// Variable consulted at compile time (all targets) and at run time (native).
pub const BASE_URL_VAR: &str = "TALENTHUB_API_URL";

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`. Trailing slashes are dropped and
    /// a blank value falls back to [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self {
                base_url: trimmed.to_string(),
            }
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Native builds read `TALENTHUB_API_URL` (after loading `.env`); every
    /// build honours the value the variable had at compile time, which is the
    /// only option for wasm.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BASE_URL_VAR) {
                return Self::new(url);
            }
        }

        match option_env!("TALENTHUB_API_URL") {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Build an endpoint URL by appending `segments` to the base URL. Each
    /// segment is percent-encoded, so ids containing `/`, `?` or `#` stay a
    /// single path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
