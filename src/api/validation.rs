//! Request-body validation gate.
//!
//! The gate is deliberately two-step: [`FieldWhitelist::validate`] only
//! answers whether the payload is acceptable, and the *caller* raises the
//! 422 [`AppError::Validation`]. The validator never touches the response.

use crate::error::AppError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

/// Body fields accepted on user write routes.
pub const USER_BODY_FIELDS: FieldWhitelist =
    FieldWhitelist::new(&["email", "firstName", "lastName"]);

/// Body fields accepted on organization write routes.
pub const ORGANIZATION_BODY_FIELDS: FieldWhitelist = FieldWhitelist::new(&["name"]);

/// Fixed, ordered whitelist of accepted field names for one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldWhitelist {
    fields: &'static [&'static str],
}

impl FieldWhitelist {
    /// Creates a whitelist over the given field names.
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    /// Returns true iff every key present in the body is whitelisted.
    ///
    /// Bodies that are not JSON objects carry no keys to inspect and pass
    /// trivially, which is what lets empty-body GET and DELETE requests
    /// through the same gate.
    pub fn validate(&self, body: &Value) -> bool {
        match body.as_object() {
            Some(map) => map.keys().all(|key| self.fields.contains(&key.as_str())),
            None => true,
        }
    }

    /// The accepted field names, in declaration order.
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }
}

/// JSON request body whose extraction failures stay on the error funnel.
///
/// Axum's stock `Json` rejection writes a plain-text body with its own
/// status; this wrapper turns malformed JSON and missing or wrong
/// `Content-Type` headers into the same 422 [`AppError::Validation`] shape
/// as every other body failure.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<Value>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(
                "Request body is invalid",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}

/// Deserializes a whitelist-approved body into a typed payload.
pub fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| {
        AppError::validation(
            "Request body is invalid",
            json!({ "reason": e.to_string() }),
        )
    })
}

/// Runs `validator` derive checks (e.g. email format) on a typed payload.
pub fn check_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|e| {
        AppError::validation(
            "Request body failed validation",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    })
}
