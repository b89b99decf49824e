use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stockroom_core::error::CoreError;

use crate::auth::basic::{BasicAuthError, CHALLENGE};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stockroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejection from the Basic-auth gate.
    #[error(transparent)]
    Auth(#[from] BasicAuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be deserialized.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// `axum::Json` with the rejection routed through [`AppError`], so that a
/// malformed or incomplete request body is a 400 like every other
/// validation failure rather than axum's default 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

// Body deserialization failures surface as 400 instead of axum's default 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DuplicateCode(code) => (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_CODE",
                    format!("Code '{code}' is already in use"),
                ),
            },

            // --- Gate rejections ---
            AppError::Auth(auth) => match auth {
                BasicAuthError::Missing => (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Authentication required".to_string(),
                ),
                BasicAuthError::Malformed => (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_CREDENTIALS",
                    "Invalid authorization header".to_string(),
                ),
                BasicAuthError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Invalid credentials".to_string(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        let mut response = (status, axum::Json(body)).into_response();
        // Every 401 advertises the expected scheme and realm.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
        }
        response
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A violation of the `code` unique constraint maps to 400, matching the
///   advisory pre-check's error. This path is the authoritative duplicate
///   guard when two creates race on the same code.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_accounts_code")
            {
                return (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_CODE",
                    "Code is already in use".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
