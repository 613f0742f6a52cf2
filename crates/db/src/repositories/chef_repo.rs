//! Repository for the `chefs` table.

use quickfire_core::types::DbId;
use sqlx::PgPool;

use crate::models::chef::{Chef, CreateChef, UpdateChef};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, status, eliminated, created_at, updated_at";

/// Provides CRUD operations for chefs.
pub struct ChefRepo;

impl ChefRepo {
    /// Insert a new chef, returning the created row.
    ///
    /// If `status` is `None`, defaults to `'active'`.
    pub async fn create(pool: &PgPool, input: &CreateChef) -> Result<Chef, sqlx::Error> {
        let query = format!(
            "INSERT INTO chefs (name, status)
             VALUES ($1, COALESCE($2, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chef>(&query)
            .bind(&input.name)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a chef by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chef>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chefs WHERE id = $1");
        sqlx::query_as::<_, Chef>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all chefs, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Chef>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chefs ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Chef>(&query).fetch_all(pool).await
    }

    /// Update a chef. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChef,
    ) -> Result<Option<Chef>, sqlx::Error> {
        let query = format!(
            "UPDATE chefs SET
                name = COALESCE($2, name),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chef>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a chef by ID. Returns `true` if a row was removed.
    ///
    /// Roster entries and score events cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chefs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
