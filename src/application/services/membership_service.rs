//! Organization membership workflows (the many-to-many association).

use crate::domain::entities::{NewMembership, NewUser, User};
use crate::domain::repositories::{MembershipRepository, OrganizationRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service managing the user-organization association.
///
/// Both operations start with an organization lookup that short-circuits to
/// NotFound, so a missing organization never leaves partial state behind.
pub struct MembershipService {
    organizations: Arc<dyn OrganizationRepository>,
    users: Arc<dyn UserRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl MembershipService {
    /// Creates a new membership service.
    pub fn new(
        organizations: Arc<dyn OrganizationRepository>,
        users: Arc<dyn UserRepository>,
        memberships: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            organizations,
            users,
            memberships,
        }
    }

    /// Creates a user and links it to an organization.
    ///
    /// Three sequential steps: organization lookup, user creation, membership
    /// link. The lookup gates user creation, so a bad organization id never
    /// creates an orphaned user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::Conflict`] if the membership already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_member(
        &self,
        organization_id: i64,
        new_user: NewUser,
    ) -> Result<User, AppError> {
        let organization = self
            .organizations
            .find_by_id(organization_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Failed to find organization with id: {organization_id}"),
                    json!({"id": organization_id}),
                )
            })?;

        let user = self.users.create(new_user).await?;
        self.memberships
            .create(NewMembership::new(organization.id, user.id))
            .await?;

        tracing::info!(
            user_id = user.id,
            organization_id = organization.id,
            "created user for organization"
        );
        Ok(user)
    }

    /// Lists the users belonging to an organization.
    ///
    /// An organization with no members yields an empty vector, not an error.
    /// Contrast with the top-level user listing, where an empty result set
    /// becomes NotFound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_members(&self, organization_id: i64) -> Result<Vec<User>, AppError> {
        self.organizations
            .find_by_id(organization_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Failed to find organization with id: {organization_id}"),
                    json!({"id": organization_id}),
                )
            })?;

        self.memberships
            .find_users_for_organization(organization_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Membership, Organization};
    use crate::domain::repositories::{
        MockMembershipRepository, MockOrganizationRepository, MockUserRepository,
    };
    use chrono::Utc;

    fn sample_organization(id: i64) -> Organization {
        let now = Utc::now();
        Organization::new(id, "Acme".to_string(), now, now)
    }

    fn sample_user(id: i64) -> User {
        let now = Utc::now();
        User::new(
            id,
            "ada@example.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            now,
            now,
        )
    }

    fn sample_new_user() -> NewUser {
        NewUser {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_member_missing_organization_never_creates_user() {
        let mut organizations = MockOrganizationRepository::new();
        organizations.expect_find_by_id().returning(|_| Ok(None));

        let mut users = MockUserRepository::new();
        users.expect_create().never();

        let mut memberships = MockMembershipRepository::new();
        memberships.expect_create().never();

        let service = MembershipService::new(
            Arc::new(organizations),
            Arc::new(users),
            Arc::new(memberships),
        );

        let err = service.add_member(99, sample_new_user()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_member_links_created_user() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id))));

        let mut users = MockUserRepository::new();
        users
            .expect_create()
            .times(1)
            .returning(|_| Ok(sample_user(10)));

        let mut memberships = MockMembershipRepository::new();
        memberships
            .expect_create()
            .times(1)
            .withf(|link| link.organization_id == 3 && link.user_id == 10)
            .returning(|link| {
                let now = Utc::now();
                Ok(Membership {
                    id: 1,
                    organization_id: link.organization_id,
                    user_id: link.user_id,
                    unique_idx: link.unique_idx(),
                    created_at: now,
                    updated_at: now,
                })
            });

        let service = MembershipService::new(
            Arc::new(organizations),
            Arc::new(users),
            Arc::new(memberships),
        );

        let user = service.add_member(3, sample_new_user()).await.unwrap();
        assert_eq!(user.id, 10);
    }

    #[tokio::test]
    async fn test_add_member_duplicate_surfaces_conflict() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id))));

        let mut users = MockUserRepository::new();
        users.expect_create().returning(|_| Ok(sample_user(10)));

        let mut memberships = MockMembershipRepository::new();
        memberships.expect_create().returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({}),
            ))
        });

        let service = MembershipService::new(
            Arc::new(organizations),
            Arc::new(users),
            Arc::new(memberships),
        );

        let err = service.add_member(3, sample_new_user()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_members_empty_is_ok() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id))));

        let mut memberships = MockMembershipRepository::new();
        memberships
            .expect_find_users_for_organization()
            .returning(|_| Ok(Vec::new()));

        let service = MembershipService::new(
            Arc::new(organizations),
            Arc::new(MockUserRepository::new()),
            Arc::new(memberships),
        );

        let members = service.list_members(3).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_list_members_missing_organization() {
        let mut organizations = MockOrganizationRepository::new();
        organizations.expect_find_by_id().returning(|_| Ok(None));

        let mut memberships = MockMembershipRepository::new();
        memberships.expect_find_users_for_organization().never();

        let service = MembershipService::new(
            Arc::new(organizations),
            Arc::new(MockUserRepository::new()),
            Arc::new(memberships),
        );

        let err = service.list_members(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
