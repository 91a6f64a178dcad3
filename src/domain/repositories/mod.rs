//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD operations
//! - [`OrganizationRepository`] - Organization CRUD operations
//! - [`MembershipRepository`] - User-organization join management

pub mod membership_repository;
pub mod organization_repository;
pub mod user_repository;

pub use membership_repository::MembershipRepository;
pub use organization_repository::{OrganizationFilter, OrganizationRepository};
pub use user_repository::{UserFilter, UserRepository};

#[cfg(test)]
pub use membership_repository::MockMembershipRepository;
#[cfg(test)]
pub use organization_repository::MockOrganizationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
