//! Shared harness for the API integration tests.
//!
//! Builds the same router (and middleware stack) production uses, with a
//! fixed admin credential pair so the gate can be exercised.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use stockroom_api::auth::basic::AdminCredentials;
use stockroom_api::config::ServerConfig;
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;

pub const TEST_ADMIN_USER: &str = "admin";
pub const TEST_ADMIN_PASS: &str = "s3cret-test-pass";

/// Build a test `ServerConfig` with safe defaults and known admin creds.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_dir: "public".to_string(),
        admin: AdminCredentials {
            username: TEST_ADMIN_USER.to_string(),
            password: TEST_ADMIN_PASS.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to `build_app_router` so integration tests exercise the exact
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// `Authorization` header value for the configured test admin.
pub fn admin_auth() -> String {
    basic_auth(TEST_ADMIN_USER, TEST_ADMIN_PASS)
}

/// `Authorization` header value for an arbitrary user/password pair.
pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

/// Issue a GET request with no body or credentials.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a request with optional credentials and an optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    path: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
