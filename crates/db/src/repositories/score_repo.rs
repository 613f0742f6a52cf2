//! Repository for the `chef_scores` table.
//!
//! Writes go through [`ScoreRepo::upsert`]: the unique constraint on
//! (chef_id, episode_id) guarantees at most one event per pair, and
//! re-scoring a pair updates it in place.

use quickfire_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{ChefScore, UpsertScore};

const COLUMNS: &str = "id, chef_id, episode_id, points, \
     quickfire_winner, quickfire_top, quickfire_bottom, \
     elimination_winner, elimination_top, elimination_bottom, lck_winner, \
     created_at, updated_at";

/// Provides score event operations.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert or replace the score event for one (chef, episode) pair.
    pub async fn upsert(pool: &PgPool, input: &UpsertScore) -> Result<ChefScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO chef_scores (chef_id, episode_id, points,
                quickfire_winner, quickfire_top, quickfire_bottom,
                elimination_winner, elimination_top, elimination_bottom, lck_winner)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (chef_id, episode_id) DO UPDATE SET
                points = EXCLUDED.points,
                quickfire_winner = EXCLUDED.quickfire_winner,
                quickfire_top = EXCLUDED.quickfire_top,
                quickfire_bottom = EXCLUDED.quickfire_bottom,
                elimination_winner = EXCLUDED.elimination_winner,
                elimination_top = EXCLUDED.elimination_top,
                elimination_bottom = EXCLUDED.elimination_bottom,
                lck_winner = EXCLUDED.lck_winner,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChefScore>(&query)
            .bind(input.chef_id)
            .bind(input.episode_id)
            .bind(input.points)
            .bind(input.flags.quickfire_winner)
            .bind(input.flags.quickfire_top)
            .bind(input.flags.quickfire_bottom)
            .bind(input.flags.elimination_winner)
            .bind(input.flags.elimination_top)
            .bind(input.flags.elimination_bottom)
            .bind(input.flags.lck_winner)
            .fetch_one(pool)
            .await
    }

    /// Find the score event for one (chef, episode) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        chef_id: DbId,
        episode_id: DbId,
    ) -> Result<Option<ChefScore>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chef_scores WHERE chef_id = $1 AND episode_id = $2");
        sqlx::query_as::<_, ChefScore>(&query)
            .bind(chef_id)
            .bind(episode_id)
            .fetch_optional(pool)
            .await
    }

    /// List every score event, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChefScore>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chef_scores ORDER BY id ASC");
        sqlx::query_as::<_, ChefScore>(&query).fetch_all(pool).await
    }

    /// List all score events for one chef.
    pub async fn list_by_chef(pool: &PgPool, chef_id: DbId) -> Result<Vec<ChefScore>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chef_scores WHERE chef_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, ChefScore>(&query)
            .bind(chef_id)
            .fetch_all(pool)
            .await
    }

    /// List all score events for one episode.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<ChefScore>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chef_scores WHERE episode_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, ChefScore>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the score event for one (chef, episode) pair.
    /// Returns `true` if a row was removed.
    pub async fn delete_by_pair(
        pool: &PgPool,
        chef_id: DbId,
        episode_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chef_scores WHERE chef_id = $1 AND episode_id = $2")
            .bind(chef_id)
            .bind(episode_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
