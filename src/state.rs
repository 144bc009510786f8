use std::sync::Arc;

use crate::models::question::{QUESTION_BANK, QuestionBank};
use crate::store::ResultStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResultStore>,
    pub questions: QuestionBank,
}

impl AppState {
    /// State serving the built-in question bank.
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self {
            store,
            questions: QUESTION_BANK,
        }
    }
}

impl FromRef<AppState> for Arc<dyn ResultStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for QuestionBank {
    fn from_ref(state: &AppState) -> Self {
        state.questions
    }
}
