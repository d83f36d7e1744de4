use axum::{
    Router,
    http::{HeaderName, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        films_handler::{create_film, healthcheck, list_films, update_film},
        users_handler::{create_user, list_users, update_user},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route(
            "/films",
            get(list_films).post(create_film).put(update_film),
        )
        .route(
            "/users",
            get(list_users).post(create_user).put(update_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS]),
        )
        .with_state(state)
}
