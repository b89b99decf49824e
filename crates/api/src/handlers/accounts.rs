//! Handlers for the account inventory: public reads, admin-gated writes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use stockroom_core::account;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::account::{CreateAccount, SetAccountStatus, UpdateAccount};
use stockroom_db::repositories::AccountRepo;

use crate::error::{AppError, AppJson, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /accounts
// ---------------------------------------------------------------------------

/// List all accounts, newest-created first. Public.
///
/// A `status` query value matching a valid status restricts the result; any
/// other value is ignored rather than rejected.
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params
        .status
        .as_deref()
        .filter(|s| account::is_valid_status(s));
    let items = AccountRepo::list(&state.pool, filter).await?;
    tracing::debug!(count = items.len(), filter, "Listed accounts");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /admin/check
// ---------------------------------------------------------------------------

/// Credential verification probe for the admin console.
pub async fn admin_check(_admin: AdminUser) -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

// ---------------------------------------------------------------------------
// POST /accounts
// ---------------------------------------------------------------------------

/// Create a new listing.
pub async fn create_account(
    _admin: AdminUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAccount>,
) -> AppResult<impl IntoResponse> {
    account::validate_title(&input.title)?;
    account::validate_code(&input.code)?;
    account::validate_price(input.price)?;
    if let Some(ref status) = input.status {
        account::validate_status(status)?;
    }

    // Advisory pre-check for a friendly message; the unique constraint on
    // `code` remains the authoritative guard under concurrent creates.
    if AccountRepo::code_exists(&state.pool, &input.code).await? {
        return Err(CoreError::DuplicateCode(input.code.clone()).into());
    }

    let created = AccountRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "Account created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /accounts/{id}
// ---------------------------------------------------------------------------

/// Replace every mutable field of an existing listing.
pub async fn update_account(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAccount>,
) -> AppResult<impl IntoResponse> {
    account::validate_title(&input.title)?;
    account::validate_code(&input.code)?;
    account::validate_price(input.price)?;
    account::validate_status(&input.status)?;

    if AccountRepo::code_taken_by_other(&state.pool, &input.code, id).await? {
        return Err(CoreError::DuplicateCode(input.code.clone()).into());
    }

    let updated = AccountRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))?;
    tracing::info!(id = updated.id, "Account updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// PATCH /accounts/{id}/status
// ---------------------------------------------------------------------------

/// Toggle a listing between `available` and `sold`.
///
/// The narrow path for the transition: only `status` (and `updated_at` via
/// the table trigger) change. Both directions are allowed, and repeating
/// the same value is a no-op in effect.
pub async fn set_account_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<SetAccountStatus>,
) -> AppResult<impl IntoResponse> {
    account::validate_status(&input.status)?;

    let updated = AccountRepo::set_status(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))?;
    tracing::info!(id = updated.id, status = %updated.status, "Account status changed");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /accounts/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a listing. There is no soft delete.
pub async fn delete_account(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AccountRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Account deleted");
        Ok(Json(DataResponse {
            data: json!({ "deleted": true }),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))
    }
}
