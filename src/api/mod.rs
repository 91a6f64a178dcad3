//! API layer: DTOs, the validation gate, handlers, routes and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
