pub mod accounts;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /accounts                list (public, optional ?status=)
/// POST   /accounts                create (admin)
/// PUT    /accounts/{id}           full update (admin)
/// PATCH  /accounts/{id}/status    status toggle (admin)
/// DELETE /accounts/{id}           delete (admin)
/// GET    /admin/check             credential probe (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(accounts::router())
        .merge(accounts::admin_router())
}
