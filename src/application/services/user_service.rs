//! User CRUD service.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for user CRUD workflows.
///
/// Synthesizes [`AppError::NotFound`] from null or zero-count repository
/// results; the repository layer itself never raises NotFound.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new user from an already-validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "created user");
        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Failed to find user with id: {id}"),
                json!({"id": id}),
            )
        })
    }

    /// Lists users matching the filter.
    ///
    /// An empty result set for the top-level collection is treated as
    /// NotFound. Contrast with the nested organization-member listing, which
    /// returns an empty 200 array.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self, filter: UserFilter) -> Result<Vec<User>, AppError> {
        let users = self.repository.find_all(filter).await?;
        if users.is_empty() {
            return Err(AppError::not_found("Failed to find users", json!({})));
        }
        Ok(users)
    }

    /// Updates a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if zero rows matched the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let updated = self.repository.update_by_id(id, update).await?;
        match updated {
            Some(user) => {
                tracing::info!(user_id = user.id, "updated user");
                Ok(user)
            }
            None => Err(AppError::not_found(
                format!("Failed to find user with id: {id}"),
                json!({"id": id}),
            )),
        }
    }

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if zero rows were deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repository.delete_by_id(id).await?;
        if rows == 0 {
            return Err(AppError::not_found(
                format!("Failed to delete user with id: {id}. Not found"),
                json!({"id": id}),
            ));
        }
        tracing::info!(user_id = id, "deleted user");
        Ok(())
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
