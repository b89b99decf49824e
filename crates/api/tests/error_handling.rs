//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::header;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use stockroom_api::auth::basic::BasicAuthError;
use stockroom_api::error::AppError;
use stockroom_core::error::CoreError;

/// Helper: convert an `AppError` into its status code, headers, and parsed
/// JSON body.
async fn error_to_response(
    err: AppError,
) -> (axum::http::StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, headers, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Account",
        id: 42,
    });

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Account with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Title must not be empty".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Title must not be empty");
}

// ---------------------------------------------------------------------------
// Test: CoreError::DuplicateCode maps to 400 with DUPLICATE_CODE code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_code_error_returns_400() {
    let err = AppError::Core(CoreError::DuplicateCode("ABC123".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_CODE");
    assert_eq!(json["error"], "Code 'ABC123' is already in use");
}

// ---------------------------------------------------------------------------
// Test: gate rejections map to 401/400, with the challenge on every 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_credentials_return_401_with_challenge() {
    let err = AppError::Auth(BasicAuthError::Missing);

    let (status, headers, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(
        headers
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"Stockroom Admin\"")
    );
}

#[tokio::test]
async fn malformed_credentials_return_400_without_challenge() {
    let err = AppError::Auth(BasicAuthError::Malformed);

    let (status, headers, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_CREDENTIALS");
    assert!(headers.get(header::WWW_AUTHENTICATE).is_none());
}

#[tokio::test]
async fn invalid_credentials_return_401_with_challenge() {
    let err = AppError::Auth(BasicAuthError::InvalidCredentials);

    let (status, headers, _) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert!(headers.get(header::WWW_AUTHENTICATE).is_some());
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid request body".into());

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid request body");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlx_row_not_found_returns_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: unexpected database errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_database_error_returns_500_and_sanitizes() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The response body must NOT leak driver-level details.
    assert_eq!(json["error"], "An internal error occurred");
}
