//! Repository for the `admin_sessions` table.

use quickfire_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::session::AdminSession;

const COLUMNS: &str = "id, token_hash, created_at, expires_at";

/// Provides admin session operations. Sessions are keyed by the SHA-256
/// hex digest of the refresh token.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a session for a freshly issued refresh token hash.
    pub async fn create(
        pool: &PgPool,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AdminSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions (token_hash, expires_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token hash, excluding expired ones.
    pub async fn find_valid(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE token_hash = $1 AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session by token hash. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Drop every expired session. Returns the number of rows removed.
    pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
