// src/routes.rs

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    handlers::{history, home, quiz},
    state::AppState,
};

/// Assembles the application router.
///
/// * `/` home page, `/quiz` form and submission, `/history` leaderboard.
/// * Applies request tracing.
/// * Injects global state (result store and question bank).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/quiz", get(quiz::show_quiz).post(quiz::submit_quiz))
        .route("/history", get(history::history))
        .fallback(not_found)
        // Global Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
