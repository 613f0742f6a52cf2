//! Episode entity model and DTOs.

use chrono::NaiveDate;
use quickfire_core::scoring::EpisodeHeader;
use quickfire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An episode row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    /// Positive; defines chronological order.
    pub episode_number: i32,
    pub title: String,
    pub air_date: NaiveDate,
    pub is_finale: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Episode {
    /// Project this row into the matrix column-header shape.
    pub fn to_header(&self) -> EpisodeHeader {
        EpisodeHeader {
            id: self.id,
            number: self.episode_number,
            title: self.title.clone(),
            air_date: self.air_date,
            is_finale: self.is_finale,
        }
    }
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    pub episode_number: i32,
    pub title: String,
    pub air_date: NaiveDate,
    /// Defaults to false if omitted.
    pub is_finale: Option<bool>,
}

/// DTO for updating an existing episode. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisode {
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub air_date: Option<NaiveDate>,
    pub is_finale: Option<bool>,
}
