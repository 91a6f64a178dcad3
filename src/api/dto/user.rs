//! DTOs for user endpoints.
//!
//! The wire format uses camelCase field names (`firstName`, `lastName`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::UserFilter;

/// Request to create a user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// Request to update a user. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// Exact-match query parameters for the user collection route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UserQuery> for UserFilter {
    fn from(query: UserQuery) -> Self {
        UserFilter {
            email: query.email,
            first_name: query.first_name,
            last_name: query.last_name,
        }
    }
}

/// User representation returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_uses_camel_case() {
        let req: CreateUserRequest = serde_json::from_value(json!({
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }))
        .unwrap();

        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "Lovelace");
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let req = CreateUserRequest {
            email: "not-an-email".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_partial_payload() {
        let req: UpdateUserRequest =
            serde_json::from_value(json!({ "firstName": "Augusta" })).unwrap();

        assert_eq!(req.first_name.as_deref(), Some("Augusta"));
        assert!(req.email.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let now = Utc::now();
        let response = UserResponse::from(User::new(
            1,
            "ada@example.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            now,
            now,
        ));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert!(value.get("first_name").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
