//! Chef entity model and DTOs.

use quickfire_core::scoring::ChefProfile;
use quickfire_core::status::ChefStatus;
use quickfire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chef row from the `chefs` table.
///
/// `status` and `eliminated` are stored as written; use [`Chef::status`]
/// for the normalized value instead of reading either column directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chef {
    pub id: DbId,
    pub name: String,
    /// Explicit status, one of `active`/`lck`/`eliminated`, or NULL for
    /// rows predating the status column.
    pub status: Option<String>,
    /// Legacy flag, only consulted when `status` is NULL.
    pub eliminated: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Chef {
    /// The normalized competition status.
    pub fn status(&self) -> ChefStatus {
        ChefStatus::normalize(self.status.as_deref(), self.eliminated)
    }

    /// Project this row into the shape the domain transforms consume.
    pub fn to_profile(&self) -> ChefProfile {
        ChefProfile {
            id: self.id,
            name: self.name.clone(),
            status: self.status(),
        }
    }
}

/// DTO for creating a new chef.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChef {
    pub name: String,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing chef. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChef {
    pub name: Option<String>,
    pub status: Option<String>,
}
