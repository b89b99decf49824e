//! Domain types, validation rules, and the error taxonomy for the account
//! inventory. No async, HTTP, or database code lives here.

pub mod account;
pub mod error;
pub mod types;
