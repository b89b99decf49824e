//! Repository for the `accounts` table.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::models::account::{Account, CreateAccount, SetAccountStatus, UpdateAccount};

const COLUMNS: &str = "id, title, code, price, level, currency_amount, category, \
     notes, tag1, tag2, tag3, ribbon, status, created_at, updated_at";

/// Provides CRUD operations for account listings.
pub struct AccountRepo;

impl AccountRepo {
    /// List listings, newest-created first.
    ///
    /// `status_filter` restricts the result to one status; callers are
    /// expected to pass only validated values (the handler drops unknown
    /// filter values instead of rejecting the request).
    pub async fn list(
        pool: &PgPool,
        status_filter: Option<&str>,
    ) -> Result<Vec<Account>, sqlx::Error> {
        match status_filter {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM accounts WHERE status = $1 \
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Account>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY created_at DESC");
                sqlx::query_as::<_, Account>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a listing by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any listing already uses `code`.
    ///
    /// Advisory only: the `uq_accounts_code` constraint is the authoritative
    /// guard under concurrent inserts racing on the same code.
    pub async fn code_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM accounts WHERE code = $1)")
                .bind(code)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Whether a listing other than `id` already uses `code`. Advisory, like
    /// [`Self::code_exists`].
    pub async fn code_taken_by_other(
        pool: &PgPool,
        code: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE code = $1 AND id <> $2)",
        )
        .bind(code)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a new listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts \
                (title, code, price, level, currency_amount, category, \
                 notes, tag1, tag2, tag3, ribbon, status) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'General'), \
                     $7, $8, $9, $10, $11, COALESCE($12, 'available')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.title)
            .bind(&input.code)
            .bind(input.price)
            .bind(&input.level)
            .bind(&input.currency_amount)
            .bind(&input.category)
            .bind(&input.notes)
            .bind(&input.tag1)
            .bind(&input.tag2)
            .bind(&input.tag3)
            .bind(&input.ribbon)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a listing. Returns `None` when `id`
    /// does not resolve. The `updated_at` bump comes from the table trigger.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAccount,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET \
                title = $2, \
                code = $3, \
                price = $4, \
                level = $5, \
                currency_amount = $6, \
                category = COALESCE($7, 'General'), \
                notes = $8, \
                tag1 = $9, \
                tag2 = $10, \
                tag3 = $11, \
                ribbon = $12, \
                status = $13 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.code)
            .bind(input.price)
            .bind(&input.level)
            .bind(&input.currency_amount)
            .bind(&input.category)
            .bind(&input.notes)
            .bind(&input.tag1)
            .bind(&input.tag2)
            .bind(&input.tag3)
            .bind(&input.ribbon)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Set only the status of a listing, leaving every other field untouched.
    /// Returns `None` when `id` does not resolve.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        input: &SetAccountStatus,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("UPDATE accounts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a listing by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
