//! HTTP Basic authentication for the admin write surface.

pub mod basic;
