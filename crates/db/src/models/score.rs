//! Score event model and DTOs.

use quickfire_core::scoring::{AchievementFlags, ScoreEvent};
use quickfire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A score row from the `chef_scores` table.
///
/// `points` and the achievement flags are independent inputs; neither is
/// derived from the other.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChefScore {
    pub id: DbId,
    pub chef_id: DbId,
    pub episode_id: DbId,
    pub points: i32,
    pub quickfire_winner: bool,
    pub quickfire_top: bool,
    pub quickfire_bottom: bool,
    pub elimination_winner: bool,
    pub elimination_top: bool,
    pub elimination_bottom: bool,
    pub lck_winner: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ChefScore {
    /// Project this row into the shape the domain transforms consume.
    pub fn to_event(&self) -> ScoreEvent {
        ScoreEvent {
            chef_id: self.chef_id,
            episode_id: self.episode_id,
            points: self.points,
            flags: AchievementFlags {
                quickfire_winner: self.quickfire_winner,
                quickfire_top: self.quickfire_top,
                quickfire_bottom: self.quickfire_bottom,
                elimination_winner: self.elimination_winner,
                elimination_top: self.elimination_top,
                elimination_bottom: self.elimination_bottom,
                lck_winner: self.lck_winner,
            },
        }
    }
}

/// DTO for writing a score. The same payload creates or replaces the
/// (chef, episode) entry; see `ScoreRepo::upsert`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertScore {
    pub chef_id: DbId,
    pub episode_id: DbId,
    pub points: i32,
    #[serde(flatten)]
    pub flags: AchievementFlags,
}
