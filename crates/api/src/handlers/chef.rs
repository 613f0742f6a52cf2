//! Handlers for the `/chefs` resource.
//!
//! Listings are public; mutations require an authenticated admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickfire_core::error::CoreError;
use quickfire_core::status::ChefStatus;
use quickfire_core::types::DbId;
use quickfire_db::models::chef::{Chef, CreateChef, UpdateChef};
use quickfire_db::repositories::ChefRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AdminUser;
use crate::state::AppState;

/// Reject status strings outside the three valid values.
fn validate_status(status: Option<&str>) -> Result<(), AppError> {
    if let Some(s) = status {
        if ChefStatus::parse(s).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status '{s}': expected active, lck, or eliminated"
            ))));
        }
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Chef name must not be empty".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/chefs
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<CreateChef>,
) -> AppResult<(StatusCode, Json<Chef>)> {
    validate_name(&input.name)?;
    validate_status(input.status.as_deref())?;
    let chef = ChefRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(chef)))
}

/// GET /api/v1/chefs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Chef>>> {
    let chefs = ChefRepo::list(&state.pool).await?;
    Ok(Json(chefs))
}

/// GET /api/v1/chefs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Chef>> {
    let chef = ChefRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Chef", id }))?;
    Ok(Json(chef))
}

/// PUT /api/v1/chefs/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChef>,
) -> AppResult<Json<Chef>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    validate_status(input.status.as_deref())?;
    let chef = ChefRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Chef", id }))?;
    Ok(Json(chef))
}

/// DELETE /api/v1/chefs/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ChefRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Chef", id }))
    }
}
