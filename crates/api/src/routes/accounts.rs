//! Route definitions for the account inventory.

use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Account routes — mounted at `/accounts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/accounts/{id}",
            put(accounts::update_account).delete(accounts::delete_account),
        )
        .route("/accounts/{id}/status", patch(accounts::set_account_status))
}

/// Admin probe route — mounted at `/admin`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/admin/check", get(accounts::admin_check))
}
