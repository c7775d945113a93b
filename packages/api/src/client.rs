//! # REST client for the TalentHub backend
//!
//! [`ApiClient`] wraps a `reqwest::Client` and the configured base URL. Every
//! method issues exactly one request: no retries, no caching, no backoff. A
//! failed call is returned to the caller, which decides what to show.
//!
//! ## Calls
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`login`](ApiClient::login) | `POST /auth/login` | none |
//! | [`register`](ApiClient::register) | `POST /auth/register` | none |
//! | [`list_jobs`](ApiClient::list_jobs) | `GET /jobs` | optional bearer |
//! | [`get_job`](ApiClient::get_job) | `GET /jobs/:jobId` | none |
//! | [`create_job`](ApiClient::create_job) | `POST /jobs` | bearer (employer) |
//! | [`apply`](ApiClient::apply) | `POST /applications` | bearer (applicant) |
//! | [`list_applications`](ApiClient::list_applications) | `GET /applications/:userId` | bearer |
//!
//! ## Responses
//!
//! Bodies are read as text first. Non-success statuses become
//! [`ApiError::Http`] carrying the body's `message`; success bodies that do not
//! decode become [`ApiError::MalformedResponse`].

use serde::de::DeserializeOwned;
use store::Session;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    decorate_listings, Application, Job, LoginRequest, LoginResponse, NewApplication, NewJob,
    RegisterRequest, RegisterResponse,
};
use crate::token::decode_claims;

/// Handle to the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Log in and build the session from the issued token and returned profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.config.endpoint(&["auth", "login"])?).json(&body);
        let response: LoginResponse = self.send_json("POST /auth/login", request).await?;
        session_from_login(response)
    }

    /// Create an account. Returns the new user's id; the caller logs in
    /// separately.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<String, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint(&["auth", "register"])?)
            .json(registration);
        let response: RegisterResponse = self.send_json("POST /auth/register", request).await?;
        response
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::malformed("No userId received from server"))
    }

    /// All job listings, decorated for display. The token is attached when
    /// one is given.
    pub async fn list_jobs(&self, token: Option<&str>) -> Result<Vec<Job>, ApiError> {
        let mut request = self.http.get(self.config.endpoint(&["jobs"])?);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let jobs: Vec<Job> = self.send_json("GET /jobs", request).await?;
        Ok(decorate_listings(jobs))
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job, ApiError> {
        let request = self.http.get(self.config.endpoint(&["jobs", job_id])?);
        self.send_json("GET /jobs/:jobId", request).await
    }

    /// Post a new job as `session`. The created record is returned when the
    /// backend echoes one back.
    pub async fn create_job(&self, session: &Session, job: &NewJob) -> Result<Option<Job>, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint(&["jobs"])?)
            .bearer_auth(&session.token)
            .json(job);
        let created: serde_json::Value = self.send_json("POST /jobs", request).await?;
        Ok(echoed::<Job>(created, "job"))
    }

    /// Apply to `job_id` as `session`.
    pub async fn apply(&self, session: &Session, job_id: &str) -> Result<Option<Application>, ApiError> {
        let body = NewApplication {
            job_id: job_id.to_string(),
        };
        let request = self
            .http
            .post(self.config.endpoint(&["applications"])?)
            .bearer_auth(&session.token)
            .json(&body);
        let created: serde_json::Value = self.send_json("POST /applications", request).await?;
        Ok(echoed::<Application>(created, "application"))
    }

    /// Applications belonging to the session's user.
    pub async fn list_applications(&self, session: &Session) -> Result<Vec<Application>, ApiError> {
        let request = self
            .http
            .get(self.config.endpoint(&["applications", session.id.as_str()])?)
            .bearer_auth(&session.token);
        self.send_json("GET /applications/:userId", request).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        label: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{} failed: {}", label, e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            let err = ApiError::http_status(status.as_u16(), &text);
            tracing::warn!("{} rejected: {}", label, err);
            return Err(err);
        }

        tracing::debug!("{} -> {}", label, status);
        parse_body(label, &text)
    }
}

fn parse_body<T: DeserializeOwned>(label: &str, text: &str) -> Result<T, ApiError> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("{} returned an unexpected body: {}", label, e);
        ApiError::malformed(format!("Unexpected response from server: {e}"))
    })
}

/// Decode a created record either from the body itself or from the `field`
/// it is wrapped in.
fn echoed<T: DeserializeOwned>(body: serde_json::Value, field: &str) -> Option<T> {
    if let Some(inner) = body.get(field) {
        if let Ok(record) = serde_json::from_value(inner.clone()) {
            return Some(record);
        }
    }
    serde_json::from_value(body).ok()
}

/// Merge the decoded token claims with the returned profile into a session.
pub fn session_from_login(response: LoginResponse) -> Result<Session, ApiError> {
    let token = response
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::malformed("No token received from server"))?;
    let claims = decode_claims(&token)?;
    let user = response
        .user
        .ok_or_else(|| ApiError::malformed("No user profile received from server"))?;

    Ok(Session {
        id: claims.id,
        email: user.email,
        username: user.name,
        role: claims.role,
        token,
    })
}
