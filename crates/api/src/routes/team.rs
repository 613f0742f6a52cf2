//! Route definitions for `/teams` and the roster sub-resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/teams`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list).post(team::create))
        .route(
            "/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
        .route(
            "/{id}/roster",
            get(team::get_roster).put(team::replace_roster),
        )
}
