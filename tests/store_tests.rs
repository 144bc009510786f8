// tests/store_tests.rs

use quizboard::store::{ResultStore, SqliteResultStore, StoreError};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory database with the real table definitions.
/// A single connection keeps every query on the same in-memory database.
async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

#[tokio::test]
async fn insert_assigns_id_and_timestamp() {
    let store = SqliteResultStore::new(setup_pool().await);

    let first = store.insert("Kwame", 100).await.unwrap();
    let second = store.insert("Ama", 40).await.unwrap();

    assert_eq!(first.name, "Kwame");
    assert_eq!(first.score, 100);
    assert!(second.id > first.id);
    assert!(second.created_at >= first.created_at);
}

#[tokio::test]
async fn top_orders_by_score_desc_then_time_asc() {
    let store = SqliteResultStore::new(setup_pool().await);

    store.insert("Early80", 80).await.unwrap();
    store.insert("Low", 20).await.unwrap();
    store.insert("Perfect", 100).await.unwrap();
    store.insert("Late80", 80).await.unwrap();

    let top = store.top(10).await.unwrap();
    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Perfect", "Early80", "Late80", "Low"]);

    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }
}

#[tokio::test]
async fn earlier_timestamp_wins_tie_even_with_higher_id() {
    let pool = setup_pool().await;

    // Rows inserted out of chronological order.
    sqlx::query("INSERT INTO quiz_results (name, score, created_at) VALUES (?, ?, ?)")
        .bind("Later")
        .bind(100_i64)
        .bind("2024-05-01 12:00:00.000")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO quiz_results (name, score, created_at) VALUES (?, ?, ?)")
        .bind("Earlier")
        .bind(100_i64)
        .bind("2024-05-01 09:30:00.000")
        .execute(&pool)
        .await
        .unwrap();

    let store = SqliteResultStore::new(pool);
    let top = store.top(10).await.unwrap();

    assert_eq!(top[0].name, "Earlier");
    assert_eq!(top[1].name, "Later");
}

#[tokio::test]
async fn top_never_exceeds_limit() {
    let store = SqliteResultStore::new(setup_pool().await);

    assert!(store.top(10).await.unwrap().is_empty());

    for i in 0..3u8 {
        store.insert("Few", i * 10).await.unwrap();
    }
    assert_eq!(store.top(10).await.unwrap().len(), 3);

    for i in 0..12u8 {
        store.insert("Many", i).await.unwrap();
    }
    assert_eq!(store.top(10).await.unwrap().len(), 10);
    assert_eq!(store.top(0).await.unwrap().len(), 0);
}

#[tokio::test]
async fn top_is_stable_without_inserts() {
    let store = SqliteResultStore::new(setup_pool().await);
    for (name, score) in [("A", 60), ("B", 60), ("C", 80), ("D", 60)] {
        store.insert(name, score).await.unwrap();
    }

    let first = store.top(10).await.unwrap();
    let second = store.top(10).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn closed_pool_reports_unavailable() {
    let pool = setup_pool().await;
    pool.close().await;

    let store = SqliteResultStore::new(pool);
    let err = store.insert("Kwame", 100).await.unwrap_err();

    assert!(matches!(err, StoreError::Unavailable(_)));
}
