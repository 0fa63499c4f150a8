//! Integration tests for the HTTP API.
//!
//! The full `/api` router runs over the in-memory store with real JWTs,
//! Mock password hashing and a fixed clock; requests go through
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use feedback_loop::adapters::auth::{JwtTokenService, MockPasswordHasher};
use feedback_loop::adapters::http::{api_router, Services};
use feedback_loop::adapters::{FixedClock, InMemoryStore, ScriptedSlugGenerator};
use feedback_loop::config::ProjectsConfig;
use feedback_loop::domain::foundation::Timestamp;
use feedback_loop::domain::project::PublicSlug;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
}

impl TestApp {
    fn new(slugs: &[&str]) -> Self {
        let clock = Arc::new(FixedClock::at(Timestamp::from_datetime(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )));
        let jwt = Arc::new(JwtTokenService::new(
            &SecretString::new("integration-test-secret-0123456789abcdef".to_string()),
            "feedback-loop",
            StdDuration::from_secs(3600),
        ));
        let slugs = slugs.iter().map(|s| PublicSlug::parse(*s).unwrap());

        let router = api_router(Services {
            uow: Arc::new(InMemoryStore::new()),
            hasher: Arc::new(MockPasswordHasher),
            tokens: jwt.clone(),
            sessions: jwt,
            clock: clock.clone(),
            slugs: Arc::new(ScriptedSlugGenerator::new(slugs)),
            projects: ProjectsConfig::default(),
        });

        Self { router, clock }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        match body {
            Some(body) => self.send_raw(method, uri, token, &body.to_string()).await,
            None => {
                let request = Self::builder(method, uri, token).body(Body::empty()).unwrap();
                self.dispatch(request).await
            }
        }
    }

    /// Sends `body` verbatim as `application/json`.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let request = Self::builder(method, uri, token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match token {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Registers and logs in, returning the bearer token.
    async fn sign_up(&self, email: &str) -> String {
        let credentials = json!({ "email": email, "password": "s3cret-pass" });
        let (status, _) = self
            .send(Method::POST, "/api/auth/register", None, Some(credentials.clone()))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(Method::POST, "/api/auth/login", None, Some(credentials))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    async fn create_project(&self, token: &str, body: Value) -> Value {
        let (status, project) = self
            .send(Method::POST, "/api/projects", Some(token), Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        project
    }

    async fn submit(&self, slug: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            &format!("/api/public/{}/feedback", slug),
            None,
            Some(body),
        )
        .await
    }
}

// =============================================================================
// Accounts
// =============================================================================

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new(&[]);
    let (status, body) = app.send(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_login_and_me() {
    let app = TestApp::new(&[]);
    let token = app.sign_up("owner@example.com").await;

    let (status, me) = app.send(Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "owner@example.com");
    assert!(me["created_at"].is_string());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "owner@example.com", "password": "other" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email address already in use");
}

#[tokio::test]
async fn bad_credentials_and_missing_tokens_are_401() {
    let app = TestApp::new(&[]);
    app.sign_up("owner@example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "owner@example.com", "password": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = app.send(Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::GET, "/api/projects", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_requires_both_fields() {
    let app = TestApp::new(&[]);
    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "owner@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].is_string());
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn project_crud_round_trip() {
    let app = TestApp::new(&["Proj0001"]);
    let token = app.sign_up("owner@example.com").await;

    let project = app
        .create_project(
            &token,
            json!({
                "name": "Widget",
                "description": "Gadget",
                "product_url": "https://w.example",
            }),
        )
        .await;
    assert_eq!(project["public_slug"], "Proj0001");
    assert_eq!(project["feedback_expiry_days"], 3);
    assert_eq!(project["accepting_feedback"], true);
    assert!(project["expiry_date"].is_string());
    let id = project["id"].as_i64().unwrap();

    let (status, listed) = app.send(Method::GET, "/api/projects", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, updated) = app
        .send(
            Method::PATCH,
            &format!("/api/projects/{}", id),
            Some(&token),
            Some(json!({ "description": null, "feedback_expiry_days": 10 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["description"].is_null());
    assert_eq!(updated["product_url"], "https://w.example");
    assert_eq!(updated["feedback_expiry_days"], 10);

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/projects/{}", id),
            Some(&token),
            Some(json!({ "feedback_expiry_days": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, deleted) = app
        .send(Method::DELETE, &format!("/api/projects/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], "Widget");

    let (status, _) = app
        .send(Method::GET, &format!("/api/projects/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::GET, "/api/public/Proj0001", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_owners_projects_are_not_found() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    let stranger = app.sign_up("stranger@example.com").await;
    let project = app.create_project(&owner, json!({ "name": "Widget" })).await;
    let uri = format!("/api/projects/{}", project["id"]);

    for _ in 0..2 {
        let (status, _) = app.send(Method::GET, &uri, Some(&stranger), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, _) = app
        .send(Method::DELETE, &uri, Some(&stranger), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(Method::GET, &format!("{}/feedback", uri), Some(&stranger), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send(Method::GET, "/api/projects/not-a-number", Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Public submission and triage
// =============================================================================

#[tokio::test]
async fn submission_and_triage_flow() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    let stranger = app.sign_up("stranger@example.com").await;
    let project = app
        .create_project(&owner, json!({ "name": "Widget", "description": "Gadget" }))
        .await;

    let (status, preview) = app.send(Method::GET, "/api/public/Proj0001", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["name"], "Widget");
    assert_eq!(preview["expires_at"], project["expiry_date"]);

    let (status, submitted) = app
        .submit(
            "Proj0001",
            json!({
                "type": "bug",
                "description": "Save does nothing",
                "submitter_email": "v@example.com",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submitted["message"], "Feedback submitted successfully");
    let feedback_id = submitted["feedback_id"].as_i64().unwrap();

    let (status, items) = app
        .send(
            Method::GET,
            &format!("/api/projects/{}/feedback", project["id"]),
            Some(&owner),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["type"], "bug");
    assert_eq!(items[0]["status"], "NEW");
    assert!(items[0]["type_label"].is_string());
    assert!(items[0]["status_label"].is_string());

    let status_uri = format!("/api/feedback/{}/status", feedback_id);

    let (status, _) = app
        .send(Method::PATCH, &status_uri, Some(&stranger), Some(json!({ "status": "ACCEPTED" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({ "status": "DONE" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status value");

    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "status is required");

    let resolve_early = json!({ "status": "RESOLVED", "note": "x" });
    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(resolve_early))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (status, accepted) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({ "status": "accepted" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(accepted["status"], "ACCEPTED");
    assert!(accepted["resolved_at"].is_null());

    let (status, _) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({ "status": "RESOLVED" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, resolved) = app
        .send(
            Method::PATCH,
            &status_uri,
            Some(&owner),
            Some(json!({ "status": "RESOLVED", "note": "fixed in 1.2" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(resolved["resolved_at"].is_string());

    let history_uri = format!("/api/feedback/{}/history", feedback_id);
    let (status, history) = app.send(Method::GET, &history_uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["old_status"], "NEW");
    assert_eq!(history[0]["new_status"], "NEW");
    assert_eq!(history[2]["new_status"], "RESOLVED");
    assert_eq!(history[2]["note"], "fixed in 1.2");

    let (status, _) = app.send(Method::GET, &history_uri, Some(&stranger), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(Method::GET, "/api/feedback/9999/history", Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submission_window_closes() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    app.create_project(&owner, json!({ "name": "Widget", "feedback_expiry_days": 3 }))
        .await;
    let body = json!({ "type": "feature", "description": "Dark mode" });

    app.clock.advance(Duration::days(2) + Duration::hours(23));
    let (status, _) = app.submit("Proj0001", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    app.clock.advance(Duration::hours(1) + Duration::minutes(1));
    let (status, error) = app.submit("Proj0001", body).await;
    assert_eq!(status, StatusCode::GONE);
    assert_eq!(error["code"], "SUBMISSION_WINDOW_CLOSED");

    let (status, _) = app.send(Method::GET, "/api/public/Proj0001", None, None).await;
    assert_eq!(status, StatusCode::GONE);

    let (status, projects) = app.send(Method::GET, "/api/projects", Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(projects[0]["accepting_feedback"], false);
}

#[tokio::test]
async fn invalid_submissions_are_rejected() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    app.create_project(&owner, json!({ "name": "Widget" })).await;

    let (status, _) = app
        .submit("Nope0000", json!({ "type": "bug", "description": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .submit("Proj0001", json!({ "type": "bug", "description": "  " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "type and description are required");

    let (status, _) = app
        .submit("Proj0001", json!({ "type": "praise", "description": "Love it" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Request bodies
// =============================================================================

fn assert_validation_error(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
    assert_eq!(body["code"], "VALIDATION_FAILED", "body: {}", body);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn null_and_mistyped_fields_are_validation_errors() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    let stranger = app.sign_up("stranger@example.com").await;
    app.create_project(&owner, json!({ "name": "Widget" })).await;

    let (status, body) = app
        .submit("Proj0001", json!({ "type": null, "description": "Crashes" }))
        .await;
    assert_validation_error(status, &body);
    assert_eq!(body["message"], "type and description are required");

    let (status, body) = app
        .submit("Proj0001", json!({ "type": "bug", "description": 5 }))
        .await;
    assert_validation_error(status, &body);
    assert_eq!(body["message"], "type and description are required");

    let (status, body) = app
        .submit("Proj0001", json!({ "type": 3, "description": "Crashes" }))
        .await;
    assert_validation_error(status, &body);

    let (status, _) = app
        .submit("Nope0000", json!({ "type": null, "description": null }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, submitted) = app
        .submit("Proj0001", json!({ "type": "bug", "description": "Crashes" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let status_uri = format!("/api/feedback/{}/status", submitted["feedback_id"]);

    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({ "status": null })))
        .await;
    assert_validation_error(status, &body);
    assert_eq!(body["message"], "status is required");

    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&owner), Some(json!({ "status": 7 })))
        .await;
    assert_validation_error(status, &body);
    assert_eq!(body["message"], "Invalid status value");

    let (status, body) = app
        .send(Method::PATCH, &status_uri, Some(&stranger), Some(json!({ "status": 7 })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, body) = app
        .send(Method::POST, "/api/projects", Some(&owner), Some(json!({ "name": null })))
        .await;
    assert_validation_error(status, &body);

    let quoted_days = json!({ "name": "Widget", "feedback_expiry_days": "3" });
    let (status, body) = app
        .send(Method::POST, "/api/projects", Some(&owner), Some(quoted_days))
        .await;
    assert_validation_error(status, &body);
}

#[tokio::test]
async fn unparsable_bodies_are_validation_errors() {
    let app = TestApp::new(&["Proj0001"]);
    let owner = app.sign_up("owner@example.com").await;
    app.create_project(&owner, json!({ "name": "Widget" })).await;

    let (status, body) = app
        .send_raw(Method::POST, "/api/auth/register", None, "{\"email\":")
        .await;
    assert_validation_error(status, &body);

    let (status, body) = app
        .send_raw(Method::POST, "/api/public/Proj0001/feedback", None, "not json")
        .await;
    assert_validation_error(status, &body);

    let (status, body) = app
        .send_raw(Method::POST, "/api/projects", Some(&owner), "[]")
        .await;
    assert_validation_error(status, &body);

    let (status, body) = app.send(Method::POST, "/api/auth/login", None, None).await;
    assert_validation_error(status, &body);
}
