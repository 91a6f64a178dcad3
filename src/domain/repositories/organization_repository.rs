//! Repository trait for organization data access.

use crate::domain::entities::{NewOrganization, Organization, UpdateOrganization};
use crate::error::AppError;
use async_trait::async_trait;

/// Exact-match filter over organization fields.
#[derive(Debug, Clone, Default)]
pub struct OrganizationFilter {
    pub name: Option<String>,
}

/// Repository interface for managing organizations.
///
/// Same null-result contract as [`super::UserRepository`]: lookups return
/// `Option`, deletes return affected-row counts, and the caller decides what
/// becomes a 404.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrganizationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Creates a new organization.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError>;

    /// Finds an organization by id, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, AppError>;

    /// Lists organizations matching the exact-match filter.
    ///
    /// An empty result set is a valid, non-error result here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError>;

    /// Applies a partial update to the row matching `id`.
    ///
    /// Returns `Ok(None)` when zero rows matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_by_id(
        &self,
        id: i64,
        update: UpdateOrganization,
    ) -> Result<Option<Organization>, AppError>;

    /// Deletes the organization with the given id.
    ///
    /// Returns the number of rows deleted (0 or 1). Hard delete; membership
    /// rows cascade at the database level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;
}
