//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod organization_users;
pub mod organizations;
pub mod users;

pub use health::health_handler;
pub use organization_users::{add_organization_user_handler, list_organization_users_handler};
pub use organizations::{
    create_organization_handler, delete_organization_handler, get_organization_handler,
    list_organizations_handler, update_organization_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
