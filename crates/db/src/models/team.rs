//! Team entity model, roster membership, and DTOs.

use quickfire_core::standings::{RosterMember, TeamProfile};
use quickfire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub owner: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Team {
    /// Project this row into the shape the standings computation consumes.
    pub fn to_profile(&self) -> TeamProfile {
        TeamProfile {
            id: self.id,
            name: self.name.clone(),
            owner: self.owner.clone(),
        }
    }
}

/// A roster row from the `team_chefs` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamChef {
    pub id: DbId,
    pub team_id: DbId,
    pub chef_id: DbId,
}

impl TeamChef {
    pub fn to_member(&self) -> RosterMember {
        RosterMember {
            team_id: self.team_id,
            chef_id: self.chef_id,
        }
    }
}

/// DTO for creating a new team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub owner: String,
}

/// DTO for updating an existing team. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub owner: Option<String>,
}

/// DTO for replacing a team's roster wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRoster {
    pub chef_ids: Vec<DbId>,
}
