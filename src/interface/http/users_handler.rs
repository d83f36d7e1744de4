use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};

use crate::{
    application::dto::{CreateUserRequest, UpdateUserRequest, UserResponse},
    interface::http::problem::{ApiProblem, ApiResult, correlation_id},
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let created = state
        .user_service
        .create_user(request)
        .await
        .map_err(|err| ApiProblem::from_domain_with_correlation(err, correlation_id(&headers)))?;
    Ok(Json(created))
}

pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let updated = state
        .user_service
        .update_user(request)
        .await
        .map_err(|err| ApiProblem::from_domain_with_correlation(err, correlation_id(&headers)))?;
    Ok(Json(updated))
}
