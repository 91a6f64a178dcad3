//! Handlers for top-level user endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserQuery, UserResponse};
use crate::api::validation::{JsonBody, USER_BODY_FIELDS, check_payload, parse_body};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 422 if the body carries an unrecognized field or fails validation.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if !USER_BODY_FIELDS.validate(&body) {
        return Err(AppError::validation(
            "Failed to create user. Request parameters are invalid",
            json!({ "accepted": USER_BODY_FIELDS.fields() }),
        ));
    }

    let payload: CreateUserRequest = parse_body(body)?;
    check_payload(&payload)?;

    let user = state.user_service.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Fetches a single user by id.
///
/// # Endpoint
///
/// `GET /users/{user_id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    tracing::info!(user_id, "fetching user");
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(user.into()))
}

/// Lists users constrained by exact-match query parameters.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Errors
///
/// Returns 404 when the filter matches zero users.
pub async fn list_users_handler(
    Query(query): Query<UserQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users(query.into()).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Updates a user by id.
///
/// # Endpoint
///
/// `PUT /users/{user_id}`
///
/// # Errors
///
/// Returns 422 if the body carries an unrecognized field.
/// Returns 404 if the update matched zero rows.
pub async fn update_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<UserResponse>, AppError> {
    if !USER_BODY_FIELDS.validate(&body) {
        return Err(AppError::validation(
            "Failed to update user. Request parameters are invalid",
            json!({ "accepted": USER_BODY_FIELDS.fields() }),
        ));
    }

    let payload: UpdateUserRequest = parse_body(body)?;
    check_payload(&payload)?;

    let user = state
        .user_service
        .update_user(user_id, payload.into())
        .await?;
    Ok(Json(user.into()))
}

/// Deletes a user by id.
///
/// # Endpoint
///
/// `DELETE /users/{user_id}`
///
/// # Errors
///
/// Returns 404 if zero rows were deleted.
pub async fn delete_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(user_id).await?;
    Ok(StatusCode::OK)
}
