//! Business logic services for the application layer.

pub mod membership_service;
pub mod organization_service;
pub mod user_service;

pub use membership_service::MembershipService;
pub use organization_service::OrganizationService;
pub use user_service::UserService;
