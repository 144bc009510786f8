// src/handlers/history.rs

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{
    error::AppError,
    store::{LEADERBOARD_SIZE, ResultStore},
    views,
};

/// Leaderboard of the best results: highest score first, earliest submission
/// first among equal scores.
pub async fn history(
    State(store): State<Arc<dyn ResultStore>>,
) -> Result<impl IntoResponse, AppError> {
    let results = store.top(LEADERBOARD_SIZE).await?;
    tracing::debug!("Leaderboard served with {} entries", results.len());

    Ok(Html(views::leaderboard::leaderboard(&results).into_string()))
}
