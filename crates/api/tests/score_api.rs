//! HTTP-level integration tests for score upsert and the score matrix.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Create a chef and two episodes, returning (chef_id, episode ids).
async fn seed(pool: &PgPool, token: &str) -> (i64, Vec<i64>) {
    let app = common::build_test_app(pool.clone());
    let chef = body_json(
        post_json_auth(
            app,
            "/api/v1/chefs",
            token,
            serde_json::json!({"name": "Amy"}),
        )
        .await,
    )
    .await;
    let chef_id = chef["id"].as_i64().unwrap();

    let mut episode_ids = Vec::new();
    for number in [1, 2] {
        let app = common::build_test_app(pool.clone());
        let episode = body_json(
            post_json_auth(
                app,
                "/api/v1/episodes",
                token,
                serde_json::json!({
                    "episode_number": number,
                    "title": format!("Episode {number}"),
                    "air_date": "2025-03-06",
                }),
            )
            .await,
        )
        .await;
        episode_ids.push(episode["id"].as_i64().unwrap());
    }

    (chef_id, episode_ids)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_score_creates_then_updates(pool: PgPool) {
    let token = common::login(&pool).await;
    let (chef_id, episodes) = seed(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/scores",
        &token,
        serde_json::json!({
            "chef_id": chef_id,
            "episode_id": episodes[0],
            "points": 5,
            "quickfire_winner": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["points"], 5);
    assert_eq!(first["quickfire_winner"], true);

    // Re-scoring the same pair replaces the row.
    let app = common::build_test_app(pool.clone());
    let second = body_json(
        put_json_auth(
            app,
            "/api/v1/scores",
            &token,
            serde_json::json!({
                "chef_id": chef_id,
                "episode_id": episodes[0],
                "points": 8,
            }),
        )
        .await,
    )
    .await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["points"], 8);
    assert_eq!(second["quickfire_winner"], false);

    let app = common::build_test_app(pool);
    let all = body_json(get(app, "/api/v1/scores").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_score_for_unknown_episode_returns_404(pool: PgPool) {
    let token = common::login(&pool).await;
    let (chef_id, _) = seed(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/scores",
        &token,
        serde_json::json!({
            "chef_id": chef_id,
            "episode_id": 999999,
            "points": 5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_score_returns_204_then_404(pool: PgPool) {
    let token = common::login(&pool).await;
    let (chef_id, episodes) = seed(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/scores",
        &token,
        serde_json::json!({"chef_id": chef_id, "episode_id": episodes[0], "points": 3}),
    )
    .await;

    let uri = format!("/api/v1/scores/{chef_id}/{}", episodes[0]);
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn matrix_keeps_absent_cells_null_and_totals_present_only(pool: PgPool) {
    let token = common::login(&pool).await;
    let (chef_id, episodes) = seed(&pool, &token).await;

    // Score only the first episode.
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/scores",
        &token,
        serde_json::json!({
            "chef_id": chef_id,
            "episode_id": episodes[0],
            "points": 5,
            "quickfire_winner": true,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/scores/matrix").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row["name"], "Amy");
    assert_eq!(row["total_points"], 5);

    let cells = row["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["points"], 5);
    assert_eq!(cells[0]["quickfire_winner"], true);
    assert!(cells[1].is_null(), "unscored episode must serialize as null");

    // Column headers are in episode order.
    let headers = json["data"]["episodes"].as_array().unwrap();
    assert_eq!(headers[0]["number"], 1);
    assert_eq!(headers[1]["number"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn matrix_sorts_by_requested_key(pool: PgPool) {
    let token = common::login(&pool).await;

    let mut chef_ids = Vec::new();
    for name in ["Zoe", "Amy"] {
        let app = common::build_test_app(pool.clone());
        let chef = body_json(
            post_json_auth(
                app,
                "/api/v1/chefs",
                &token,
                serde_json::json!({"name": name}),
            )
            .await,
        )
        .await;
        chef_ids.push(chef["id"].as_i64().unwrap());
    }

    let app = common::build_test_app(pool.clone());
    let episode = body_json(
        post_json_auth(
            app,
            "/api/v1/episodes",
            &token,
            serde_json::json!({"episode_number": 1, "title": "Premiere", "air_date": "2025-03-06"}),
        )
        .await,
    )
    .await;
    let episode_id = episode["id"].as_i64().unwrap();

    // Zoe outscores Amy.
    for (chef_id, points) in [(chef_ids[0], 10), (chef_ids[1], 2)] {
        let app = common::build_test_app(pool.clone());
        put_json_auth(
            app,
            "/api/v1/scores",
            &token,
            serde_json::json!({"chef_id": chef_id, "episode_id": episode_id, "points": points}),
        )
        .await;
    }

    // Default sort: descending total.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/scores/matrix").await).await;
    let names: Vec<&str> = json["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Zoe", "Amy"]);

    // Explicit name sort.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/scores/matrix?sort=name").await).await;
    let names: Vec<&str> = json["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Amy", "Zoe"]);
}
