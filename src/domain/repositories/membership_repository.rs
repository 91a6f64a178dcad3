//! Repository trait for the user-organization join table.

use crate::domain::entities::{Membership, NewMembership, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for membership links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMembershipRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Links a user to an organization.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the membership already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_membership: NewMembership) -> Result<Membership, AppError>;

    /// Lists the users linked to an organization.
    ///
    /// An empty result set is a valid, non-error result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_users_for_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<User>, AppError>;
}
