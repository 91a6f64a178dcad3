//! Organization CRUD service.

use crate::domain::entities::{NewOrganization, Organization, UpdateOrganization};
use crate::domain::repositories::{OrganizationFilter, OrganizationRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for organization CRUD workflows.
///
/// Same NotFound-synthesis contract as [`super::UserService`].
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepository>,
}

impl OrganizationService {
    /// Creates a new organization service.
    pub fn new(repository: Arc<dyn OrganizationRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new organization from an already-validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_organization(
        &self,
        new_organization: NewOrganization,
    ) -> Result<Organization, AppError> {
        let organization = self.repository.create(new_organization).await?;
        tracing::info!(organization_id = organization.id, "created organization");
        Ok(organization)
    }

    /// Retrieves an organization by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_organization(&self, id: i64) -> Result<Organization, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Failed to find organization with id: {id}"),
                json!({"id": id}),
            )
        })
    }

    /// Lists organizations matching the filter.
    ///
    /// An empty result set is treated as NotFound for the top-level
    /// collection route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no organization matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_organizations(
        &self,
        filter: OrganizationFilter,
    ) -> Result<Vec<Organization>, AppError> {
        let organizations = self.repository.find_all(filter).await?;
        if organizations.is_empty() {
            return Err(AppError::not_found(
                "Failed to find organizations",
                json!({}),
            ));
        }
        Ok(organizations)
    }

    /// Updates an organization by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if zero rows matched the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_organization(
        &self,
        id: i64,
        update: UpdateOrganization,
    ) -> Result<Organization, AppError> {
        let updated = self.repository.update_by_id(id, update).await?;
        match updated {
            Some(organization) => {
                tracing::info!(organization_id = organization.id, "updated organization");
                Ok(organization)
            }
            None => Err(AppError::not_found(
                format!("Failed to find organization with id: {id}"),
                json!({"id": id}),
            )),
        }
    }

    /// Deletes an organization by id.
    ///
    /// Membership rows cascade at the database level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if zero rows were deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_organization(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repository.delete_by_id(id).await?;
        if rows == 0 {
            return Err(AppError::not_found(
                format!("Failed to delete organization with id: {id}. Not found"),
                json!({"id": id}),
            ));
        }
        tracing::info!(organization_id = id, "deleted organization");
        Ok(())
    }
}
