//! Handlers for the nested organization-members routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::validation::{JsonBody, USER_BODY_FIELDS, check_payload, parse_body};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user and links it to an organization.
///
/// # Endpoint
///
/// `POST /organizations/{organization_id}/users`
///
/// # Errors
///
/// Returns 422 if the body carries an unrecognized field or fails validation.
/// Returns 404 if the organization does not exist; no user is created in
/// that case.
/// Returns 409 if the user is already a member.
pub async fn add_organization_user_handler(
    Path(organization_id): Path<i64>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if !USER_BODY_FIELDS.validate(&body) {
        return Err(AppError::validation(
            "Failed to create user for organization. Request parameters are invalid",
            json!({ "accepted": USER_BODY_FIELDS.fields() }),
        ));
    }

    let payload: CreateUserRequest = parse_body(body)?;
    check_payload(&payload)?;

    let user = state
        .membership_service
        .add_member(organization_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists the users belonging to an organization.
///
/// An organization with no members yields `200 []`, unlike the top-level
/// collection routes where an empty result is a 404.
///
/// # Endpoint
///
/// `GET /organizations/{organization_id}/users`
///
/// # Errors
///
/// Returns 404 only when the organization itself does not exist.
pub async fn list_organization_users_handler(
    Path(organization_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let members = state.membership_service.list_members(organization_id).await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}
