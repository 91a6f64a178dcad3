//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and retrieval
//! - [`PgOrganizationRepository`] - Organization storage and retrieval
//! - [`PgMembershipRepository`] - User-organization links

pub mod pg_membership_repository;
pub mod pg_organization_repository;
pub mod pg_user_repository;

pub use pg_membership_repository::PgMembershipRepository;
pub use pg_organization_repository::PgOrganizationRepository;
pub use pg_user_repository::PgUserRepository;
