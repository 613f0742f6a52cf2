//! Handlers for the `/scores` resource: raw score events plus the
//! computed score matrix.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use quickfire_core::error::CoreError;
use quickfire_core::scoring::{self, ScoreMatrix, SortKey};
use quickfire_core::types::DbId;
use quickfire_db::models::score::{ChefScore, UpsertScore};
use quickfire_db::repositories::{ChefRepo, EpisodeRepo, ScoreRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub chef_id: Option<DbId>,
    pub episode_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixQuery {
    /// `name`, `total`, `status`, or `episode-N` (1-based). Anything
    /// else falls back to `total`.
    pub sort: Option<String>,
}

/// PUT /api/v1/scores
///
/// Creates or replaces the score event for the (chef, episode) pair.
/// Both sides of the pair must already exist.
pub async fn upsert(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<UpsertScore>,
) -> AppResult<Json<ChefScore>> {
    ChefRepo::find_by_id(&state.pool, input.chef_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chef",
            id: input.chef_id,
        }))?;
    EpisodeRepo::find_by_id(&state.pool, input.episode_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: input.episode_id,
        }))?;

    let score = ScoreRepo::upsert(&state.pool, &input).await?;
    Ok(Json(score))
}

/// GET /api/v1/scores?chef_id=..&episode_id=..
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ChefScore>>> {
    let scores = match (query.chef_id, query.episode_id) {
        (Some(chef_id), None) => ScoreRepo::list_by_chef(&state.pool, chef_id).await?,
        (None, Some(episode_id)) => ScoreRepo::list_by_episode(&state.pool, episode_id).await?,
        (Some(chef_id), Some(episode_id)) => {
            ScoreRepo::find_by_pair(&state.pool, chef_id, episode_id)
                .await?
                .into_iter()
                .collect()
        }
        (None, None) => ScoreRepo::list(&state.pool).await?,
    };
    Ok(Json(scores))
}

/// DELETE /api/v1/scores/{chef_id}/{episode_id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((chef_id, episode_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ScoreRepo::delete_by_pair(&state.pool, chef_id, episode_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Score event for chef",
            id: chef_id,
        }))
    }
}

/// GET /api/v1/scores/matrix?sort=..
///
/// The chef performance table: one row per chef, one cell per episode in
/// chronological order, plus per-row totals. Cells with no recorded
/// score serialize as `null`, which the rendering layer must keep
/// distinct from a score of 0.
pub async fn matrix(
    State(state): State<AppState>,
    Query(query): Query<MatrixQuery>,
) -> AppResult<Json<DataResponse<ScoreMatrix>>> {
    let chefs = ChefRepo::list(&state.pool).await?;
    let episodes = EpisodeRepo::list(&state.pool).await?;
    let scores = ScoreRepo::list(&state.pool).await?;

    let profiles: Vec<_> = chefs.iter().map(|c| c.to_profile()).collect();
    let headers: Vec<_> = episodes.iter().map(|e| e.to_header()).collect();
    let events: Vec<_> = scores.iter().map(|s| s.to_event()).collect();

    let sort = query
        .sort
        .as_deref()
        .and_then(SortKey::parse)
        .unwrap_or(SortKey::TotalPoints);

    let mut matrix = scoring::build(&profiles, &headers, &events);
    scoring::order_rows(&mut matrix.rows, sort);

    Ok(Json(DataResponse { data: matrix }))
}
