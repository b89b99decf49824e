//! Account row model and per-operation input DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::{DbId, Timestamp};

/// A row from the `accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: DbId,
    pub title: String,
    pub code: String,
    pub price: i64,
    pub level: Option<String>,
    pub currency_amount: Option<String>,
    pub category: String,
    pub notes: Option<String>,
    pub tag1: Option<String>,
    pub tag2: Option<String>,
    pub tag3: Option<String>,
    pub ribbon: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new listing.
///
/// `status` and `category` may be omitted; the database fills in the
/// defaults (`available` / `General`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccount {
    pub title: String,
    pub code: String,
    pub price: i64,
    pub level: Option<String>,
    pub currency_amount: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub tag1: Option<String>,
    pub tag2: Option<String>,
    pub tag3: Option<String>,
    pub ribbon: Option<String>,
    pub status: Option<String>,
}

/// DTO for a full update of an existing listing.
///
/// This is a replace, not a patch: every mutable field takes the value from
/// the payload, and omitted optional fields are cleared.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccount {
    pub title: String,
    pub code: String,
    pub price: i64,
    pub level: Option<String>,
    pub currency_amount: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub tag1: Option<String>,
    pub tag2: Option<String>,
    pub tag3: Option<String>,
    pub ribbon: Option<String>,
    pub status: String,
}

/// DTO for the status-toggle operation.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAccountStatus {
    pub status: String,
}
