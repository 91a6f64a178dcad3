//! DTOs for organization endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewOrganization, Organization, UpdateOrganization};
use crate::domain::repositories::OrganizationFilter;

/// Request to create an organization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl From<CreateOrganizationRequest> for NewOrganization {
    fn from(req: CreateOrganizationRequest) -> Self {
        NewOrganization { name: req.name }
    }
}

/// Request to update an organization. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
}

impl From<UpdateOrganizationRequest> for UpdateOrganization {
    fn from(req: UpdateOrganizationRequest) -> Self {
        UpdateOrganization { name: req.name }
    }
}

/// Exact-match query parameters for the organization collection route.
#[derive(Debug, Default, Deserialize)]
pub struct OrganizationQuery {
    pub name: Option<String>,
}

impl From<OrganizationQuery> for OrganizationFilter {
    fn from(query: OrganizationQuery) -> Self {
        OrganizationFilter { name: query.name }
    }
}

/// Organization representation returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            created_at: organization.created_at,
            updated_at: organization.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_requires_name() {
        let req: Result<CreateOrganizationRequest, _> = serde_json::from_value(json!({}));
        assert!(req.is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req = CreateOrganizationRequest {
            name: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_shape() {
        let now = Utc::now();
        let response = OrganizationResponse::from(Organization::new(2, "Acme".to_string(), now, now));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["name"], "Acme");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
