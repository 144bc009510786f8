// tests/router_tests.rs

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use quizboard::{
    routes,
    state::AppState,
    store::{InMemoryResultStore, ResultStore},
};
use tower::ServiceExt;

fn app(store: Arc<InMemoryResultStore>) -> Router {
    routes::create_router(AppState::new(store))
}

fn form_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/quiz")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn form_fields_are_scored_by_index() {
    let store = Arc::new(InMemoryResultStore::new());

    let response = app(store.clone())
        .oneshot(form_post("username=kwame&q0=D&q1=C&q2=B&q3=C&q4=B&extra=ignored"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("100%"));

    let top = store.top(10).await.unwrap();
    assert_eq!(top[0].name, "Kwame");
    assert_eq!(top[0].score, 100);
}

#[tokio::test]
async fn missing_username_names_the_field() {
    let store = Arc::new(InMemoryResultStore::new());

    let response = app(store.clone())
        .oneshot(form_post("q0=D&q1=C"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "Missing field `username`");
    assert!(store.top(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_username_is_accepted() {
    let store = Arc::new(InMemoryResultStore::new());

    let response = app(store.clone())
        .oneshot(form_post("username=&q0=A"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.top(1).await.unwrap()[0].name, "");
}

#[tokio::test]
async fn quiz_page_is_html() {
    let response = app(Arc::new(InMemoryResultStore::new()))
        .oneshot(Request::builder().uri("/quiz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}
