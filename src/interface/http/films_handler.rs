use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};

use crate::{
    application::dto::{CreateFilmRequest, FilmResponse, HealthResponse, UpdateFilmRequest},
    interface::http::problem::{ApiProblem, ApiResult, correlation_id},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_films(State(state): State<AppState>) -> ApiResult<Json<Vec<FilmResponse>>> {
    let films = state
        .film_service
        .list_films()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(films))
}

pub async fn create_film(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateFilmRequest>,
) -> ApiResult<Json<FilmResponse>> {
    let created = state
        .film_service
        .create_film(request)
        .await
        .map_err(|err| ApiProblem::from_domain_with_correlation(err, correlation_id(&headers)))?;
    Ok(Json(created))
}

pub async fn update_film(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateFilmRequest>,
) -> ApiResult<Json<FilmResponse>> {
    let updated = state
        .film_service
        .update_film(request)
        .await
        .map_err(|err| ApiProblem::from_domain_with_correlation(err, correlation_id(&headers)))?;
    Ok(Json(updated))
}
