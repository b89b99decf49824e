//! Static entry points: the public storefront and the admin console.
//!
//! These pages are collaborators of the API, not part of it; they are plain
//! files served from the configured public directory.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Serve `/` and `/admin` from the public directory, with the rest of the
/// directory available for assets. Unknown routes fall through to a 404.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let dir = Path::new(&config.public_dir);
    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .route_service("/admin", ServeFile::new(dir.join("admin.html")))
        .fallback_service(ServeDir::new(dir))
}
