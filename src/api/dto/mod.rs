//! Request and response DTOs for the REST API.

pub mod health;
pub mod organization;
pub mod user;
