mod common;

use ecosort::db::{PgItemProvider, fetch_items, migrate, save_session, seed_items, update_progress};
use ecosort::model::{ProgressUpdate, SessionSummary};
use ecosort::provider::ItemProvider;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

async fn setup() -> (PgPool, ContainerAsync<Postgres>) {
    let container = Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let pool = PgPoolOptions::new()
        .connect(&format!(
            "postgres://postgres:postgres@{}:{}/postgres",
            host, port
        ))
        .await
        .unwrap();
    (pool, container)
}

#[tokio::test]
#[ignore]
async fn seeded_catalog_round_trips_through_the_provider() {
    let (pool, _container) = setup().await;
    let items = common::build_test_pool();

    migrate(&pool).await.unwrap();
    seed_items(&pool, &items).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waste_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, items.len() as i64);

    let loaded = fetch_items(&pool).await.unwrap();
    assert_eq!(loaded, items);

    let provider = PgItemProvider::new(pool);
    let via_provider = provider.items().await.unwrap();
    assert_eq!(via_provider, items);
}

#[tokio::test]
#[ignore]
async fn invalid_bin_string_fails_the_fetch() {
    let (pool, _container) = setup().await;
    migrate(&pool).await.unwrap();

    sqlx::query(
        "INSERT INTO waste_items (id, name_en, name_de, description_en, description_de, correct_bin) \
         VALUES (99, 'Mystery', 'Rätsel', '', '', 'compost')",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(fetch_items(&pool).await.is_err());
}

#[tokio::test]
#[ignore]
async fn sessions_are_appended_per_play_through() {
    let (pool, _container) = setup().await;
    migrate(&pool).await.unwrap();

    let summary = SessionSummary {
        level: 3,
        score: 40,
        items_sorted: 5,
        correct_sorts: 4,
        accuracy: 0.8,
        time_spent_seconds: 87,
    };
    save_session(&pool, "anna", &summary).await.unwrap();
    save_session(&pool, "anna", &summary).await.unwrap();

    let rows = sqlx::query(
        "SELECT level, score, items_sorted, correct_sorts, accuracy, time_spent_seconds \
         FROM game_sessions WHERE player = $1",
    )
    .bind("anna")
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get::<i32, _>("level"), 3);
    assert_eq!(rows[0].get::<i32, _>("score"), 40);
    assert_eq!(rows[0].get::<f64, _>("accuracy"), 0.8);
    assert_eq!(rows[0].get::<i64, _>("time_spent_seconds"), 87);
}

#[tokio::test]
#[ignore]
async fn progress_upserts_a_single_row_per_player() {
    let (pool, _container) = setup().await;
    migrate(&pool).await.unwrap();

    update_progress(
        &pool,
        "anna",
        &ProgressUpdate {
            level: 1,
            total_correct: 4,
            total_attempts: 5,
            completed_levels: 1,
        },
    )
    .await
    .unwrap();
    update_progress(
        &pool,
        "anna",
        &ProgressUpdate {
            level: 2,
            total_correct: 9,
            total_attempts: 10,
            completed_levels: 2,
        },
    )
    .await
    .unwrap();

    let rows = sqlx::query("SELECT level, total_correct, total_attempts, completed_levels FROM user_progress")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<i32, _>("level"), 2);
    assert_eq!(rows[0].get::<i64, _>("total_correct"), 9);
    assert_eq!(rows[0].get::<i64, _>("total_attempts"), 10);
    assert_eq!(rows[0].get::<i32, _>("completed_levels"), 2);
}
