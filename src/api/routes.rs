//! API route configuration.

use crate::api::handlers::{
    add_organization_user_handler, create_organization_handler, create_user_handler,
    delete_organization_handler, delete_user_handler, get_organization_handler, get_user_handler,
    list_organization_users_handler, list_organizations_handler, list_users_handler,
    update_organization_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `POST   /users`                               - Create a user
/// - `GET    /users`                               - List users (query filters)
/// - `GET    /users/{user_id}`                     - Fetch a user
/// - `PUT    /users/{user_id}`                     - Update a user
/// - `DELETE /users/{user_id}`                     - Delete a user
/// - `POST   /organizations`                       - Create an organization
/// - `GET    /organizations`                       - List organizations (query filters)
/// - `GET    /organizations/{organization_id}`     - Fetch an organization
/// - `PUT    /organizations/{organization_id}`     - Update an organization
/// - `DELETE /organizations/{organization_id}`     - Delete an organization
/// - `POST   /organizations/{organization_id}/users` - Create a user as a member
/// - `GET    /organizations/{organization_id}/users` - List an organization's members
pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route(
            "/users/{user_id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/organizations",
            post(create_organization_handler).get(list_organizations_handler),
        )
        .route(
            "/organizations/{organization_id}",
            get(get_organization_handler)
                .put(update_organization_handler)
                .delete(delete_organization_handler),
        )
        .route(
            "/organizations/{organization_id}/users",
            post(add_organization_user_handler).get(list_organization_users_handler),
        )
}
