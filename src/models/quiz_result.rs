// src/models/quiz_result.rs

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

/// Longest display name kept on a result record, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Represents the 'quiz_results' table in the database.
/// One row per submitted quiz; rows are never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub id: i64,
    pub name: String,
    pub score: u8,
    pub created_at: DateTime<Utc>,
}

/// Raw row as SQLite returns it. `created_at` is stored as UTC text
/// without an offset, so it decodes as a naive timestamp.
#[derive(Debug, FromRow)]
pub(crate) struct QuizResultRow {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub created_at: NaiveDateTime,
}

impl From<QuizResultRow> for QuizResult {
    fn from(row: QuizResultRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            score: row.score.clamp(0, 100) as u8,
            created_at: row.created_at.and_utc(),
        }
    }
}

/// Urlencoded body of `POST /quiz`: `username` plus `q0..q{N-1}` collected
/// in `fields`.
#[derive(Debug, Deserialize)]
pub struct QuizForm {
    pub username: Option<String>,

    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

/// One attempt at the quiz, as read from the submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub username: String,

    /// Chosen label per question index; `None` when the question was skipped.
    pub answers: Vec<Option<String>>,
}

impl Submission {
    /// Returns `None` when `username` is missing. Fields past the last
    /// question are ignored.
    pub fn from_form(mut form: QuizForm, question_count: usize) -> Option<Self> {
        let username = form.username?;
        let answers = (0..question_count)
            .map(|i| form.fields.remove(&format!("q{}", i)))
            .collect();

        Some(Self { username, answers })
    }
}

/// Per-question line of the result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub guess: Option<String>,
    pub is_correct: bool,
}
