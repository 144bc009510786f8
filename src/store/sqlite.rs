// src/store/sqlite.rs

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{ResultStore, StoreError};
use crate::models::quiz_result::{QuizResult, QuizResultRow};

/// `ResultStore` backed by the `quiz_results` table.
///
/// `created_at` is filled by the column default in fixed-width UTC text, so
/// ordering on the text column is chronological.
#[derive(Debug, Clone)]
pub struct SqliteResultStore {
    pool: SqlitePool,
}

impl SqliteResultStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn insert(&self, name: &str, score: u8) -> Result<QuizResult, StoreError> {
        let row = sqlx::query_as::<_, QuizResultRow>(
            r#"
            INSERT INTO quiz_results (name, score)
            VALUES (?, ?)
            RETURNING id, name, score, created_at
            "#,
        )
        .bind(name)
        .bind(i64::from(score))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert quiz result: {:?}", e);
            StoreError::from(e)
        })?;

        Ok(row.into())
    }

    async fn top(&self, limit: usize) -> Result<Vec<QuizResult>, StoreError> {
        let rows = sqlx::query_as::<_, QuizResultRow>(
            r#"
            SELECT id, name, score, created_at
            FROM quiz_results
            ORDER BY score DESC, created_at ASC, id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch leaderboard: {:?}", e);
            StoreError::from(e)
        })?;

        Ok(rows.into_iter().map(QuizResult::from).collect())
    }
}
