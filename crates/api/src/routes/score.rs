//! Route definitions for `/scores`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::score;
use crate::state::AppState;

/// Routes mounted at `/scores`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(score::list).put(score::upsert))
        .route("/matrix", get(score::matrix))
        .route("/{chef_id}/{episode_id}", delete(score::delete))
}
