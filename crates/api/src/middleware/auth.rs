//! Basic-auth extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::basic::{self, BasicAuthError};
use crate::error::AppError;
use crate::state::AppState;

/// Marker extracted from a valid `Authorization: Basic ...` header.
///
/// Use this as an extractor parameter in any handler on the admin write
/// surface:
///
/// ```ignore
/// async fn my_handler(_admin: AdminUser) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// Rejections carry the `WWW-Authenticate` challenge where applicable.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            // Non-ASCII header bytes are a malformed header, not a missing one.
            Some(value) => Some(value.to_str().map_err(|_| BasicAuthError::Malformed)?),
            None => None,
        };
        basic::authorize(header, &state.config.admin)?;
        Ok(AdminUser)
    }
}
