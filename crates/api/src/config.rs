use crate::auth::basic::{AdminCredentials, DEFAULT_ADMIN_PASS, DEFAULT_ADMIN_USER};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables -- in particular the admin
/// credentials, whose defaults are publicly guessable.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the storefront and admin HTML entry points.
    pub public_dir: String,
    /// Credentials the Basic-auth gate checks writes against.
    pub admin: AdminCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `ADMIN_USER`           | `admin`                    |
    /// | `ADMIN_PASS`           | `changeme`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into());

        let admin = AdminCredentials {
            username: std::env::var("ADMIN_USER").unwrap_or_else(|_| DEFAULT_ADMIN_USER.into()),
            password: std::env::var("ADMIN_PASS").unwrap_or_else(|_| DEFAULT_ADMIN_PASS.into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_dir,
            admin,
        }
    }
}
