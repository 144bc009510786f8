// src/store/mod.rs

//! Persistence for quiz results.
//!
//! Handlers talk to [`ResultStore`] only; the backing medium is chosen at
//! startup (`SqliteResultStore` in production, `InMemoryResultStore` for
//! tests and throwaway runs).

mod memory;
mod sqlite;

use std::fmt;

use async_trait::async_trait;

use crate::models::quiz_result::QuizResult;

pub use memory::InMemoryResultStore;
pub use sqlite::SqliteResultStore;

/// Number of rows shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug)]
pub enum StoreError {
    /// The persistence medium could not be reached or refused the operation.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "result store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Append-only store of quiz results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Appends a result. The store assigns the id and the creation timestamp.
    async fn insert(&self, name: &str, score: u8) -> Result<QuizResult, StoreError>;

    /// At most `limit` results, best score first; ties go to the earlier
    /// submission, then to the lower id.
    async fn top(&self, limit: usize) -> Result<Vec<QuizResult>, StoreError>;
}
