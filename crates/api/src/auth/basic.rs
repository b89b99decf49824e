//! HTTP Basic credential check for the admin write surface.
//!
//! The decision is a pure function of the `Authorization` header value and
//! the configured credentials, so it is unit-testable without an HTTP
//! harness. Handlers go through the
//! [`AdminUser`](crate::middleware::auth::AdminUser) extractor, which calls
//! [`authorize`] against the state's configuration.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Username used when `ADMIN_USER` is not set.
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Password used when `ADMIN_PASS` is not set. Publicly guessable; startup
/// logs a warning whenever it is in effect.
pub const DEFAULT_ADMIN_PASS: &str = "changeme";

/// Challenge advertised on every 401 from the gate.
pub const CHALLENGE: &str = "Basic realm=\"Stockroom Admin\"";

/// The admin principal and secret the gate checks against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Whether both parts are still the well-known defaults.
    pub fn is_default(&self) -> bool {
        self.username == DEFAULT_ADMIN_USER && self.password == DEFAULT_ADMIN_PASS
    }
}

/// Why a request was turned away at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    /// No `Authorization` header at all. 401 with challenge.
    #[error("Authentication required")]
    Missing,

    /// Header present but structurally broken: wrong scheme, undecodable
    /// base64, non-UTF-8 payload, or no `user:pass` separator. 400.
    #[error("Invalid authorization header")]
    Malformed,

    /// Well-formed header, wrong principal or secret. 401 with challenge.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Decide whether `header` carries the configured admin credentials.
///
/// Stateless: each request is checked independently, so every protected
/// call must present explicit credentials. Both parts are exact string
/// matches with no normalization.
pub fn authorize(
    header: Option<&str>,
    expected: &AdminCredentials,
) -> Result<(), BasicAuthError> {
    let header = header.ok_or(BasicAuthError::Missing)?;
    let payload = header
        .strip_prefix("Basic ")
        .ok_or(BasicAuthError::Malformed)?;
    let decoded = STANDARD
        .decode(payload.trim())
        .map_err(|_| BasicAuthError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::Malformed)?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::Malformed)?;

    if username == expected.username && password == expected.password {
        Ok(())
    } else {
        Err(BasicAuthError::InvalidCredentials)
    }
}
