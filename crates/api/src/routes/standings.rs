//! Route definitions for `/standings`.

use axum::routing::get;
use axum::Router;

use crate::handlers::standings;
use crate::state::AppState;

/// Routes mounted at `/standings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(standings::list))
}
