//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickfire_core::error::CoreError;
use quickfire_core::types::DbId;
use quickfire_db::models::episode::{CreateEpisode, Episode, UpdateEpisode};
use quickfire_db::repositories::EpisodeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AdminUser;
use crate::state::AppState;

fn validate_number(number: i32) -> Result<(), AppError> {
    if number < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Episode number must be positive".into(),
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Episode title must not be empty".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/episodes
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    validate_number(input.episode_number)?;
    validate_title(&input.title)?;
    let episode = EpisodeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(episode))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    if let Some(number) = input.episode_number {
        validate_number(number)?;
    }
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(episode))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EpisodeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))
    }
}
