use axum::http::StatusCode;
use serde_json::{Value, json};

mod common;
use common::{app, assert_problem, get, post, put, request_json};

#[tokio::test]
async fn film_lifecycle_create_list_update() {
    let app = app();

    let (status, created) = request_json(
        app.clone(),
        post(
            "/films",
            json!({
                "name": "The Matrix",
                "description": "simulated reality",
                "releaseDate": "1999-03-31",
                "duration": 136
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.get("id").and_then(Value::as_u64), Some(1));
    assert_eq!(
        created.get("name").and_then(Value::as_str),
        Some("The Matrix")
    );
    assert_eq!(
        created.get("releaseDate").and_then(Value::as_str),
        Some("1999-03-31")
    );
    assert_eq!(created.get("duration").and_then(Value::as_i64), Some(136));

    let (status, listed) = request_json(app.clone(), get("/films")).await;
    assert_eq!(status, StatusCode::OK);
    let films = listed.as_array().expect("list must be an array");
    assert_eq!(films.len(), 1);

    // Partial update: only the description changes, everything else is kept.
    let (status, updated) = request_json(
        app.clone(),
        put(
            "/films",
            json!({
                "id": 1,
                "description": "a hacker learns the truth"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated.get("name").and_then(Value::as_str),
        Some("The Matrix")
    );
    assert_eq!(
        updated.get("description").and_then(Value::as_str),
        Some("a hacker learns the truth")
    );
    assert_eq!(
        updated.get("releaseDate").and_then(Value::as_str),
        Some("1999-03-31")
    );
    assert_eq!(updated.get("duration").and_then(Value::as_i64), Some(136));
}

#[tokio::test]
async fn film_ids_grow_across_creates() {
    let app = app();

    for expected_id in 1..=3u64 {
        let (status, created) = request_json(
            app.clone(),
            post(
                "/films",
                json!({
                    "name": format!("film {expected_id}"),
                    "description": "",
                    "releaseDate": "2000-01-01",
                    "duration": 90
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            created.get("id").and_then(Value::as_u64),
            Some(expected_id)
        );
    }
}

#[tokio::test]
async fn blank_film_name_is_rejected_as_missing_condition() {
    let (status, problem) = request_json(
        app(),
        post(
            "/films",
            json!({
                "name": " ",
                "description": "",
                "releaseDate": "2000-01-01",
                "duration": 90
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Required field missing");
}

#[tokio::test]
async fn overlong_description_is_rejected() {
    let (status, problem) = request_json(
        app(),
        post(
            "/films",
            json!({
                "name": "X",
                "description": "x".repeat(201),
                "releaseDate": "2000-01-01",
                "duration": 90
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");
}

#[tokio::test]
async fn release_date_before_first_screening_is_rejected() {
    let (status, problem) = request_json(
        app(),
        post(
            "/films",
            json!({
                "name": "X",
                "description": "",
                "releaseDate": "1700-12-28",
                "duration": 90
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");
}

#[tokio::test]
async fn negative_duration_is_rejected() {
    let (status, problem) = request_json(
        app(),
        post(
            "/films",
            json!({
                "name": "X",
                "description": "",
                "releaseDate": "2000-01-01",
                "duration": -100
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let (status, problem) = request_json(
        app(),
        put("/films", json!({ "name": "renamed" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Required field missing");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let (status, problem) = request_json(
        app(),
        put("/films", json!({ "id": 42, "name": "ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");
}

#[tokio::test]
async fn update_to_zero_duration_is_applied() {
    let app = app();

    let (status, created) = request_json(
        app.clone(),
        post(
            "/films",
            json!({
                "name": "short",
                "description": "",
                "releaseDate": "2000-01-01",
                "duration": 15
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created.get("id").and_then(Value::as_u64).unwrap();

    let (status, updated) = request_json(
        app.clone(),
        put("/films", json!({ "id": id, "duration": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("duration").and_then(Value::as_i64), Some(0));
}

#[tokio::test]
async fn invalid_patch_field_leaves_stored_film_untouched() {
    let app = app();

    let (status, _) = request_json(
        app.clone(),
        post(
            "/films",
            json!({
                "name": "intact",
                "description": "original",
                "releaseDate": "2000-01-01",
                "duration": 90
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request_json(
        app.clone(),
        put(
            "/films",
            json!({ "id": 1, "description": "mutated", "duration": -1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = request_json(app.clone(), get("/films")).await;
    let films = listed.as_array().unwrap();
    assert_eq!(
        films[0].get("description").and_then(Value::as_str),
        Some("original")
    );
    assert_eq!(films[0].get("duration").and_then(Value::as_i64), Some(90));
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let (status, body) = request_json(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
}
