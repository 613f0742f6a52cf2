//! Repository for the `episodes` table.

use quickfire_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};

const COLUMNS: &str = "id, episode_number, title, air_date, is_finale, created_at, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    ///
    /// If `is_finale` is `None`, defaults to false.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (episode_number, title, air_date, is_finale)
             VALUES ($1, $2, $3, COALESCE($4, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.episode_number)
            .bind(&input.title)
            .bind(input.air_date)
            .bind(input.is_finale)
            .fetch_one(pool)
            .await
    }

    /// Find an episode by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all episodes in chronological order.
    ///
    /// Ordered by `(episode_number, id)` so number ties stay deterministic.
    pub async fn list(pool: &PgPool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes ORDER BY episode_number ASC, id ASC");
        sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await
    }

    /// Update an episode. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                episode_number = COALESCE($2, episode_number),
                title = COALESCE($3, title),
                air_date = COALESCE($4, air_date),
                is_finale = COALESCE($5, is_finale),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(input.episode_number)
            .bind(&input.title)
            .bind(input.air_date)
            .bind(input.is_finale)
            .fetch_optional(pool)
            .await
    }

    /// Delete an episode by ID. Returns `true` if a row was removed.
    ///
    /// Score events for the episode cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
