// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse},
};

use crate::{
    error::AppError,
    models::{
        question::QuestionBank,
        quiz_result::{QuizForm, Submission},
    },
    store::ResultStore,
    utils::{name::normalize_name, score},
    views,
};

/// Renders the quiz form.
pub async fn show_quiz(State(questions): State<QuestionBank>) -> impl IntoResponse {
    Html(views::quiz::form(questions.questions()).into_string())
}

/// Scores a submitted quiz and records the result.
///
/// * `username` is required; it is title-cased and cut to 50 characters.
/// * `q0..q{N-1}` are optional; a missing answer counts as wrong.
/// * The result is stored before the summary page is rendered, so a store
///   failure fails the whole submission.
pub async fn submit_quiz(
    State(store): State<Arc<dyn ResultStore>>,
    State(questions): State<QuestionBank>,
    form: Result<Form<QuizForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(body) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let submission = Submission::from_form(body, questions.len())
        .ok_or_else(|| AppError::BadRequest("Missing field `username`".to_string()))?;

    let username = normalize_name(&submission.username);
    let percentage = score::score(&submission.answers, &questions.answer_key());

    let record = store.insert(&username, percentage).await?;
    tracing::info!(
        "Quiz submitted: id={} name={:?} score={}",
        record.id,
        record.name,
        record.score
    );

    let outcomes = score::outcomes(questions.questions(), &submission.answers);

    Ok(Html(
        views::quiz::result(&record.name, &outcomes, record.score).into_string(),
    ))
}
