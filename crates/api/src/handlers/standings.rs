//! Handler for the `/standings` resource.

use axum::extract::State;
use axum::Json;
use quickfire_core::standings::{self, TeamStanding};
use quickfire_db::repositories::{ChefRepo, RosterRepo, ScoreRepo, TeamRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/standings
///
/// The home-page leaderboard: every team with its roster, per-chef season
/// totals, team total, and rank.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TeamStanding>>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    let roster = RosterRepo::list_all(&state.pool).await?;
    let chefs = ChefRepo::list(&state.pool).await?;
    let scores = ScoreRepo::list(&state.pool).await?;

    let team_profiles: Vec<_> = teams.iter().map(|t| t.to_profile()).collect();
    let members: Vec<_> = roster.iter().map(|m| m.to_member()).collect();
    let chef_profiles: Vec<_> = chefs.iter().map(|c| c.to_profile()).collect();
    let events: Vec<_> = scores.iter().map(|s| s.to_event()).collect();

    let standings =
        standings::compute_standings(&team_profiles, &members, &chef_profiles, &events);

    Ok(Json(DataResponse { data: standings }))
}
