//! Handlers for the `/teams` resource and its roster sub-resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickfire_core::error::CoreError;
use quickfire_core::types::DbId;
use quickfire_db::models::team::{CreateTeam, ReplaceRoster, Team, TeamChef, UpdateTeam};
use quickfire_db::repositories::{ChefRepo, RosterRepo, TeamRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::AdminUser;
use crate::state::AppState;

/// POST /api/v1/teams
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    if input.name.trim().is_empty() || input.owner.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Team name and owner must not be empty".into(),
        )));
    }
    let team = TeamRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/v1/teams
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(teams))
}

/// GET /api/v1/teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// PUT /api/v1/teams/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Team", id }))
    }
}

// ---------------------------------------------------------------------------
// Roster sub-resource
// ---------------------------------------------------------------------------

/// GET /api/v1/teams/{id}/roster
pub async fn get_roster(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TeamChef>>> {
    TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    let roster = RosterRepo::list_by_team(&state.pool, id).await?;
    Ok(Json(roster))
}

/// PUT /api/v1/teams/{id}/roster
///
/// Replaces the team's drafted chefs wholesale. Every referenced chef
/// must exist; unknown ids fail the whole replacement.
pub async fn replace_roster(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceRoster>,
) -> AppResult<Json<Vec<TeamChef>>> {
    TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;

    for chef_id in &input.chef_ids {
        ChefRepo::find_by_id(&state.pool, *chef_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Chef",
                id: *chef_id,
            }))?;
    }

    let roster = RosterRepo::replace(&state.pool, id, &input.chef_ids).await?;
    Ok(Json(roster))
}
