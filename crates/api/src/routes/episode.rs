//! Route definitions for `/episodes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
}
