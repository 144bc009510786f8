// src/handlers/home.rs

use axum::response::{Html, IntoResponse};

use crate::views;

/// Landing page.
pub async fn home() -> impl IntoResponse {
    Html(views::home::home().into_string())
}
