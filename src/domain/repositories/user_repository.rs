//! Repository trait for user data access.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Exact-match filter over user fields, extracted from query parameters.
///
/// `None` fields do not constrain the query.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Repository interface for managing users.
///
/// Absence is not an error at this layer: lookups return `Option`, deletes
/// return the affected-row count. Callers decide when a null or zero-count
/// result becomes a 404.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists users matching the exact-match filter.
    ///
    /// An empty result set is a valid, non-error result here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self, filter: UserFilter) -> Result<Vec<User>, AppError>;

    /// Applies a partial update to the row matching `id`.
    ///
    /// Returns `Ok(None)` when zero rows matched, `Ok(Some(user))` with the
    /// post-update representation otherwise. Blindly reporting success
    /// without checking the matched-row count is a correctness bug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_by_id(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError>;

    /// Deletes the user with the given id.
    ///
    /// Returns the number of rows deleted (0 or 1). Hard delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;

    /// Verifies the backing store answers queries at all.
    ///
    /// Used by the health endpoint to report database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
