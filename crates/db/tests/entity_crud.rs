//! Integration tests for entity CRUD against a real database:
//! chefs, teams, episodes, roster replacement, and cascade behavior.

use chrono::NaiveDate;
use quickfire_core::status::ChefStatus;
use quickfire_db::models::chef::{CreateChef, UpdateChef};
use quickfire_db::models::episode::CreateEpisode;
use quickfire_db::models::team::{CreateTeam, UpdateTeam};
use quickfire_db::repositories::{ChefRepo, EpisodeRepo, RosterRepo, TeamRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_chef(name: &str) -> CreateChef {
    CreateChef {
        name: name.to_string(),
        status: None,
    }
}

fn new_team(name: &str, owner: &str) -> CreateTeam {
    CreateTeam {
        name: name.to_string(),
        owner: owner.to_string(),
    }
}

fn new_episode(number: i32, title: &str) -> CreateEpisode {
    CreateEpisode {
        episode_number: number,
        title: title.to_string(),
        air_date: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
        is_finale: None,
    }
}

// ---------------------------------------------------------------------------
// Chefs
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn chef_create_defaults_to_active(pool: PgPool) {
    let chef = ChefRepo::create(&pool, &new_chef("Amy"))
        .await
        .expect("create should succeed");

    assert_eq!(chef.name, "Amy");
    assert_eq!(chef.status.as_deref(), Some("active"));
    assert!(!chef.eliminated);
    assert_eq!(chef.status(), ChefStatus::Active);
}

#[sqlx::test]
async fn chef_update_applies_only_provided_fields(pool: PgPool) {
    let chef = ChefRepo::create(&pool, &new_chef("Ben")).await.unwrap();

    let updated = ChefRepo::update(
        &pool,
        chef.id,
        &UpdateChef {
            name: None,
            status: Some("lck".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.name, "Ben");
    assert_eq!(updated.status(), ChefStatus::LastChanceKitchen);
}

#[sqlx::test]
async fn chef_list_orders_by_name(pool: PgPool) {
    ChefRepo::create(&pool, &new_chef("Zoe")).await.unwrap();
    ChefRepo::create(&pool, &new_chef("Amy")).await.unwrap();
    ChefRepo::create(&pool, &new_chef("Maria")).await.unwrap();

    let chefs = ChefRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = chefs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Maria", "Zoe"]);
}

#[sqlx::test]
async fn legacy_rows_without_status_fall_back_to_eliminated_flag(pool: PgPool) {
    // Rows from before the status column carry NULL status and only the
    // boolean flag.
    sqlx::query("INSERT INTO chefs (name, status, eliminated) VALUES ('Old Gone', NULL, TRUE)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO chefs (name, status, eliminated) VALUES ('Old Active', NULL, FALSE)")
        .execute(&pool)
        .await
        .unwrap();

    let chefs = ChefRepo::list(&pool).await.unwrap();
    assert_eq!(chefs[0].name, "Old Active");
    assert_eq!(chefs[0].status(), ChefStatus::Active);
    assert_eq!(chefs[1].name, "Old Gone");
    assert_eq!(chefs[1].status(), ChefStatus::Eliminated);
}

#[sqlx::test]
async fn chef_delete_returns_false_for_missing_row(pool: PgPool) {
    assert!(!ChefRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test]
async fn chef_status_check_constraint_rejects_garbage(pool: PgPool) {
    let result = ChefRepo::create(
        &pool,
        &CreateChef {
            name: "Bad".to_string(),
            status: Some("winner".to_string()),
        },
    )
    .await;
    assert!(result.is_err(), "invalid status must violate the CHECK");
}

// ---------------------------------------------------------------------------
// Teams and rosters
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn team_crud_roundtrip(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Flavor Favorites", "Alex"))
        .await
        .unwrap();

    let fetched = TeamRepo::find_by_id(&pool, team.id)
        .await
        .unwrap()
        .expect("team should exist");
    assert_eq!(fetched.owner, "Alex");

    let updated = TeamRepo::update(
        &pool,
        team.id,
        &UpdateTeam {
            name: Some("Sous Savants".to_string()),
            owner: None,
        },
    )
    .await
    .unwrap()
    .expect("row should exist");
    assert_eq!(updated.name, "Sous Savants");
    assert_eq!(updated.owner, "Alex");

    assert!(TeamRepo::delete(&pool, team.id).await.unwrap());
    assert!(TeamRepo::find_by_id(&pool, team.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn roster_replace_swaps_membership(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Kitchen Killers", "Taylor"))
        .await
        .unwrap();
    let a = ChefRepo::create(&pool, &new_chef("A")).await.unwrap();
    let b = ChefRepo::create(&pool, &new_chef("B")).await.unwrap();
    let c = ChefRepo::create(&pool, &new_chef("C")).await.unwrap();

    RosterRepo::replace(&pool, team.id, &[a.id, b.id])
        .await
        .unwrap();
    let roster = RosterRepo::list_by_team(&pool, team.id).await.unwrap();
    assert_eq!(roster.len(), 2);

    // Replacing again drops A and B and keeps only C.
    RosterRepo::replace(&pool, team.id, &[c.id]).await.unwrap();
    let roster = RosterRepo::list_by_team(&pool, team.id).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].chef_id, c.id);
}

#[sqlx::test]
async fn roster_replace_rolls_back_on_duplicate(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Dup", "X")).await.unwrap();
    let a = ChefRepo::create(&pool, &new_chef("A")).await.unwrap();
    let b = ChefRepo::create(&pool, &new_chef("B")).await.unwrap();

    RosterRepo::replace(&pool, team.id, &[a.id]).await.unwrap();

    let result = RosterRepo::replace(&pool, team.id, &[b.id, b.id]).await;
    assert!(result.is_err(), "duplicate chef ids must fail");

    // The failed replacement must not have touched the existing roster.
    let roster = RosterRepo::list_by_team(&pool, team.id).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].chef_id, a.id);
}

#[sqlx::test]
async fn deleting_team_cascades_roster_but_keeps_chefs(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Short Lived", "Y"))
        .await
        .unwrap();
    let chef = ChefRepo::create(&pool, &new_chef("Survivor")).await.unwrap();
    RosterRepo::replace(&pool, team.id, &[chef.id]).await.unwrap();

    TeamRepo::delete(&pool, team.id).await.unwrap();

    assert!(RosterRepo::list_all(&pool).await.unwrap().is_empty());
    assert!(ChefRepo::find_by_id(&pool, chef.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn episode_list_orders_by_number(pool: PgPool) {
    EpisodeRepo::create(&pool, &new_episode(3, "Restaurant Wars"))
        .await
        .unwrap();
    EpisodeRepo::create(&pool, &new_episode(1, "Premiere")).await.unwrap();
    EpisodeRepo::create(&pool, &new_episode(2, "Quickfire Gauntlet"))
        .await
        .unwrap();

    let episodes = EpisodeRepo::list(&pool).await.unwrap();
    let numbers: Vec<i32> = episodes.iter().map(|e| e.episode_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[sqlx::test]
async fn episode_number_must_be_positive(pool: PgPool) {
    let result = EpisodeRepo::create(&pool, &new_episode(0, "Bad")).await;
    assert!(result.is_err(), "episode_number = 0 must violate the CHECK");
}
