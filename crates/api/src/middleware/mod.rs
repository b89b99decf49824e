//! Authentication extractors for protected routes.
//!
//! - [`auth::AdminUser`] -- gates the admin write surface behind HTTP Basic
//!   credentials. Public reads never pass through it.

pub mod auth;
