//! Handlers for top-level organization endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::organization::{
    CreateOrganizationRequest, OrganizationQuery, OrganizationResponse, UpdateOrganizationRequest,
};
use crate::api::validation::{JsonBody, ORGANIZATION_BODY_FIELDS, check_payload, parse_body};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new organization.
///
/// # Endpoint
///
/// `POST /organizations`
///
/// # Errors
///
/// Returns 422 if the body carries an unrecognized field or fails validation.
pub async fn create_organization_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<OrganizationResponse>), AppError> {
    if !ORGANIZATION_BODY_FIELDS.validate(&body) {
        return Err(AppError::validation(
            "Failed to create organization. Request parameters are invalid",
            json!({ "accepted": ORGANIZATION_BODY_FIELDS.fields() }),
        ));
    }

    let payload: CreateOrganizationRequest = parse_body(body)?;
    check_payload(&payload)?;

    let organization = state
        .organization_service
        .create_organization(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(organization.into())))
}

/// Fetches a single organization by id.
///
/// # Endpoint
///
/// `GET /organizations/{organization_id}`
///
/// # Errors
///
/// Returns 404 if the organization does not exist.
pub async fn get_organization_handler(
    Path(organization_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrganizationResponse>, AppError> {
    tracing::info!(organization_id, "fetching organization");
    let organization = state
        .organization_service
        .get_organization(organization_id)
        .await?;
    Ok(Json(organization.into()))
}

/// Lists organizations constrained by exact-match query parameters.
///
/// # Endpoint
///
/// `GET /organizations`
///
/// # Errors
///
/// Returns 404 when the filter matches zero organizations.
pub async fn list_organizations_handler(
    Query(query): Query<OrganizationQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationResponse>>, AppError> {
    let organizations = state
        .organization_service
        .list_organizations(query.into())
        .await?;
    Ok(Json(organizations.into_iter().map(Into::into).collect()))
}

/// Updates an organization by id.
///
/// # Endpoint
///
/// `PUT /organizations/{organization_id}`
///
/// # Errors
///
/// Returns 422 if the body carries an unrecognized field.
/// Returns 404 if the update matched zero rows.
pub async fn update_organization_handler(
    Path(organization_id): Path<i64>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<OrganizationResponse>, AppError> {
    if !ORGANIZATION_BODY_FIELDS.validate(&body) {
        return Err(AppError::validation(
            "Failed to update organization. Request parameters are invalid",
            json!({ "accepted": ORGANIZATION_BODY_FIELDS.fields() }),
        ));
    }

    let payload: UpdateOrganizationRequest = parse_body(body)?;
    check_payload(&payload)?;

    let organization = state
        .organization_service
        .update_organization(organization_id, payload.into())
        .await?;
    Ok(Json(organization.into()))
}

/// Deletes an organization by id.
///
/// # Endpoint
///
/// `DELETE /organizations/{organization_id}`
///
/// # Errors
///
/// Returns 404 if zero rows were deleted.
pub async fn delete_organization_handler(
    Path(organization_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .organization_service
        .delete_organization(organization_id)
        .await?;
    Ok(StatusCode::OK)
}
