//! Integration tests for the REST client against a mock backend.

use api::models::NewJob;
use api::{ApiClient, ApiConfig, ApiError, RegisterRequest, Role, Session};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()))
}

fn jwt(claims: serde_json::Value) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

fn session(role: Role) -> Session {
    Session {
        id: "u-42".to_string(),
        email: "someone@example.com".to_string(),
        username: "Someone".to_string(),
        role,
        token: "bearer-token".to_string(),
    }
}

#[tokio::test]
async fn test_login_builds_session_with_token_role() {
    let server = MockServer::start().await;
    let token = jwt(json!({"id": "u-42", "role": "applicant"}));

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "dev@example.com", "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "user": {"email": "dev@example.com", "name": "Dev"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .login(" dev@example.com ", "s3cret")
        .await
        .unwrap();

    assert_eq!(session.role, Role::Applicant);
    assert_eq!(session.id, "u-42");
    assert_eq!(session.username, "Dev");
    assert_eq!(session.token, token);
}

#[tokio::test]
async fn test_login_rejection_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login("dev@example.com", "nope")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 401, .. }));
    assert_eq!(err.display_message("Invalid credentials"), "Wrong password");
}

#[tokio::test]
async fn test_register_returns_user_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Grace",
            "email": "grace@example.com",
            "password": "hunter22",
            "role": "employer"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"userId": "new-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let user_id = client_for(&server)
        .register(&RegisterRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Employer,
        })
        .await
        .unwrap();

    assert_eq!(user_id, "new-1");
}

#[tokio::test]
async fn test_register_without_user_id_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&RegisterRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Applicant,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
    assert_eq!(
        err.display_message("Registration failed. Please try again."),
        "No userId received from server"
    );
}

#[tokio::test]
async fn test_list_jobs_attaches_bearer_and_decorates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(header("authorization", "Bearer bearer-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Backend Engineer", "description": "Rust", "createdBy": "u-9"},
            {"id": 2, "title": "UI Designer", "description": "Figma", "createdBy": "u-9"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .list_jobs(Some("bearer-token"))
        .await
        .unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].category.as_deref(), Some("Software"));
    assert_eq!(jobs[1].category.as_deref(), Some("Design"));
    assert!(jobs[0].is_featured);
}

#[tokio::test]
async fn test_list_jobs_anonymous_sends_no_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let jobs = client_for(&server).list_jobs(None).await.unwrap();
    assert!(jobs.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_get_job_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_job("missing").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            message: None
        }
    );
    assert_eq!(err.display_message("Job not found"), "Job not found");
}

#[tokio::test]
async fn test_get_job_escapes_the_id_into_one_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/a%2Fb%3Fc%23d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a/b?c#d",
            "title": "Odd id",
            "description": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = client_for(&server).get_job("a/b?c#d").await.unwrap();
    assert_eq!(job.id, "a/b?c#d");
    assert_eq!(job.title, "Odd id");
}

#[tokio::test]
async fn test_create_job_sends_exactly_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(header("authorization", "Bearer bearer-token"))
        .and(body_json(json!({"title": "SRE", "description": "Keep it up"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "j-1", "title": "SRE", "description": "Keep it up", "createdBy": "u-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_job(
            &session(Role::Employer),
            &NewJob {
                title: "SRE".to_string(),
                description: "Keep it up".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.map(|j| j.id), Some("j-1".to_string()));
}

#[tokio::test]
async fn test_create_job_failure_keeps_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Only employers can post jobs"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_job(
            &session(Role::Applicant),
            &NewJob {
                title: "SRE".to_string(),
                description: "x".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.display_message("Failed to add job"), "Only employers can post jobs");
}

#[tokio::test]
async fn test_apply_posts_job_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applications"))
        .and(header("authorization", "Bearer bearer-token"))
        .and(body_json(json!({"jobId": "j-7"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Applied"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .apply(&session(Role::Applicant), "j-7")
        .await
        .unwrap();

    // The backend only acknowledged; nothing to echo back.
    assert!(created.is_none());
}

#[tokio::test]
async fn test_list_applications_uses_session_user_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applications/u-42"))
        .and(header("authorization", "Bearer bearer-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "jobTitle": "UI Designer", "jobDescription": "Figma", "status": "pending"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let apps = client_for(&server)
        .list_applications(&session(Role::Applicant))
        .await
        .unwrap();

    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].job_title, "UI Designer");
    assert_eq!(apps[0].status, "pending");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
    let err = client.list_jobs(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.display_message("Failed to load jobs."), "Failed to load jobs.");
}
