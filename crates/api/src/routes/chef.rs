//! Route definitions for `/chefs`.

use axum::routing::get;
use axum::Router;

use crate::handlers::chef;
use crate::state::AppState;

/// Routes mounted at `/chefs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chef::list).post(chef::create))
        .route(
            "/{id}",
            get(chef::get_by_id).put(chef::update).delete(chef::delete),
        )
}
