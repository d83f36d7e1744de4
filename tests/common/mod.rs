use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cinetrack::{
    application::{film_service::FilmService, user_service::UserService},
    build_router,
    infrastructure::{
        in_memory_film_repository::InMemoryFilmRepository,
        in_memory_user_repository::InMemoryUserRepository,
    },
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> Router {
    let film_service = Arc::new(FilmService::new(Arc::new(InMemoryFilmRepository::new())));
    let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    build_router(AppState::new(film_service, user_service))
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request must complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    let value = serde_json::from_slice(&bytes).expect("body must be JSON");
    (status, value)
}

pub fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn assert_problem(problem: &Value, status: u64, title: &str) {
    assert_eq!(
        problem.get("status").and_then(Value::as_u64),
        Some(status),
        "unexpected problem status in {problem}"
    );
    assert_eq!(
        problem.get("title").and_then(Value::as_str),
        Some(title),
        "unexpected problem title in {problem}"
    );
    assert!(
        problem
            .get("correlation_id")
            .and_then(Value::as_str)
            .is_some(),
        "problem must carry a correlation id: {problem}"
    );
}
