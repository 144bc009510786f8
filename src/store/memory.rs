// src/store/memory.rs

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{ResultStore, StoreError};
use crate::models::quiz_result::QuizResult;

/// `ResultStore` kept in process memory. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    records: Mutex<Vec<QuizResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn insert(&self, name: &str, score: u8) -> Result<QuizResult, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let record = QuizResult {
            id: records.last().map_or(1, |r| r.id + 1),
            name: name.to_string(),
            score,
            created_at: Utc::now(),
        };
        records.push(record.clone());

        Ok(record)
    }

    async fn top(&self, limit: usize) -> Result<Vec<QuizResult>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut ranked = records.clone();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        ranked.truncate(limit);

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_ascending_ids() {
        let store = InMemoryResultStore::new();
        let a = store.insert("Ama", 40).await.unwrap();
        let b = store.insert("Kofi", 60).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.created_at <= b.created_at);
    }

    #[tokio::test]
    async fn top_orders_by_score_then_time() {
        let store = InMemoryResultStore::new();
        store.insert("First", 80).await.unwrap();
        store.insert("Low", 20).await.unwrap();
        store.insert("High", 100).await.unwrap();
        store.insert("Second", 80).await.unwrap();

        let names: Vec<String> = store
            .top(10)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["High", "First", "Second", "Low"]);
    }

    #[tokio::test]
    async fn top_respects_limit() {
        let store = InMemoryResultStore::new();
        for i in 0..12u8 {
            store.insert("Player", i).await.unwrap();
        }

        assert_eq!(store.top(10).await.unwrap().len(), 10);
        assert_eq!(store.top(3).await.unwrap()[0].score, 11);
        assert!(InMemoryResultStore::new().top(10).await.unwrap().is_empty());
    }
}
