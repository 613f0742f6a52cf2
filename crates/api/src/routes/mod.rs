pub mod auth;
pub mod chef;
pub mod episode;
pub mod health;
pub mod score;
pub mod standings;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (admin = Bearer access token required):
///
/// ```text
/// /auth/login                       login (public)
/// /auth/refresh                     refresh access token (public)
/// /auth/logout                      end session (admin)
///
/// /standings                        team leaderboard (GET)
///
/// /chefs                            list (GET), create (admin POST)
/// /chefs/{id}                       get, update (admin PUT), delete (admin DELETE)
///
/// /teams                            list (GET), create (admin POST)
/// /teams/{id}                       get, update (admin PUT), delete (admin DELETE)
/// /teams/{id}/roster                get roster, replace roster (admin PUT)
///
/// /episodes                         list (GET), create (admin POST)
/// /episodes/{id}                    get, update (admin PUT), delete (admin DELETE)
///
/// /scores                           list (GET, ?chef_id/?episode_id), upsert (admin PUT)
/// /scores/matrix                    chef-by-episode score matrix (GET, ?sort=)
/// /scores/{chef_id}/{episode_id}    delete one event (admin DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Team leaderboard.
        .nest("/standings", standings::router())
        // Entity CRUD.
        .nest("/chefs", chef::router())
        .nest("/teams", team::router())
        .nest("/episodes", episode::router())
        // Score events and the computed matrix.
        .nest("/scores", score::router())
}
