//! Repository for the `team_chefs` roster join table.

use quickfire_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::TeamChef;

const COLUMNS: &str = "id, team_id, chef_id";

/// Provides roster membership operations.
pub struct RosterRepo;

impl RosterRepo {
    /// List the roster entries for one team.
    pub async fn list_by_team(pool: &PgPool, team_id: DbId) -> Result<Vec<TeamChef>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM team_chefs WHERE team_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, TeamChef>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// List every roster entry across all teams.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TeamChef>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_chefs ORDER BY id ASC");
        sqlx::query_as::<_, TeamChef>(&query).fetch_all(pool).await
    }

    /// Replace a team's roster wholesale inside one transaction.
    ///
    /// Duplicate ids in `chef_ids` surface as a unique-constraint error
    /// and roll the whole replacement back.
    pub async fn replace(
        pool: &PgPool,
        team_id: DbId,
        chef_ids: &[DbId],
    ) -> Result<Vec<TeamChef>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM team_chefs WHERE team_id = $1")
            .bind(team_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO team_chefs (team_id, chef_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let mut roster = Vec::with_capacity(chef_ids.len());
        for chef_id in chef_ids {
            let row = sqlx::query_as::<_, TeamChef>(&insert)
                .bind(team_id)
                .bind(chef_id)
                .fetch_one(&mut *tx)
                .await?;
            roster.push(row);
        }

        tx.commit().await?;
        Ok(roster)
    }
}
