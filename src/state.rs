//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{MembershipService, OrganizationService, UserService};

/// Application state shared across request handlers.
///
/// Services are constructed once at startup over injected repositories;
/// handlers only ever see this struct. There is no other in-process shared
/// mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub organization_service: Arc<OrganizationService>,
    pub membership_service: Arc<MembershipService>,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(
        user_service: Arc<UserService>,
        organization_service: Arc<OrganizationService>,
        membership_service: Arc<MembershipService>,
    ) -> Self {
        Self {
            user_service,
            organization_service,
            membership_service,
        }
    }
}
