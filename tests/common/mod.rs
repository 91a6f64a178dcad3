#![allow(dead_code)]

//! In-memory repository fakes and state wiring for endpoint tests.
//!
//! These implement the domain repository traits over mutex-guarded maps so
//! the full request pipeline (validation gate, services, error funnel) can be
//! exercised without a database.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use mesh_directory::AppState;
use mesh_directory::api::handlers::health_handler;
use mesh_directory::api::routes::directory_routes;
use mesh_directory::application::services::{MembershipService, OrganizationService, UserService};
use mesh_directory::domain::entities::{
    Membership, NewMembership, NewOrganization, NewUser, Organization, UpdateOrganization,
    UpdateUser, User,
};
use mesh_directory::domain::repositories::{
    MembershipRepository, OrganizationFilter, OrganizationRepository, UserFilter, UserRepository,
};
use mesh_directory::error::AppError;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let user = User::new(
            id,
            new_user.email,
            new_user.first_name,
            new_user.last_name,
            now,
            now,
        );
        self.users.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self, filter: UserFilter) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .filter(|u| filter.email.as_ref().is_none_or(|e| *e == u.email))
            .filter(|u| filter.first_name.as_ref().is_none_or(|f| *f == u.first_name))
            .filter(|u| filter.last_name.as_ref().is_none_or(|l| *l == u.last_name))
            .cloned()
            .collect())
    }

    async fn update_by_id(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.users.lock().unwrap().remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct InMemoryOrganizationRepository {
    organizations: Mutex<BTreeMap<i64, Organization>>,
    next_id: AtomicI64,
}

impl InMemoryOrganizationRepository {
    pub fn new() -> Self {
        Self {
            organizations: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let organization = Organization::new(id, new_organization.name, now, now);
        self.organizations
            .lock()
            .unwrap()
            .insert(id, organization.clone());
        Ok(organization)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, AppError> {
        Ok(self.organizations.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError> {
        let organizations = self.organizations.lock().unwrap();
        Ok(organizations
            .values()
            .filter(|o| filter.name.as_ref().is_none_or(|n| *n == o.name))
            .cloned()
            .collect())
    }

    async fn update_by_id(
        &self,
        id: i64,
        update: UpdateOrganization,
    ) -> Result<Option<Organization>, AppError> {
        let mut organizations = self.organizations.lock().unwrap();
        let Some(organization) = organizations.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            organization.name = name;
        }
        organization.updated_at = Utc::now();
        Ok(Some(organization.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.organizations.lock().unwrap().remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

pub struct InMemoryMembershipRepository {
    links: Mutex<Vec<Membership>>,
    users: Arc<InMemoryUserRepository>,
    next_id: AtomicI64,
}

impl InMemoryMembershipRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            users,
            next_id: AtomicI64::new(1),
        }
    }

    pub fn count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn create(&self, new_membership: NewMembership) -> Result<Membership, AppError> {
        let mut links = self.links.lock().unwrap();

        // Mirrors the unique index on (organization_id, user_id, unique_idx).
        let duplicate = links.iter().any(|l| {
            l.organization_id == new_membership.organization_id
                && l.user_id == new_membership.user_id
        });
        if duplicate {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "memberships_organization_user_key" }),
            ));
        }

        let now = Utc::now();
        let membership = Membership {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            organization_id: new_membership.organization_id,
            user_id: new_membership.user_id,
            unique_idx: new_membership.unique_idx(),
            created_at: now,
            updated_at: now,
        };
        links.push(membership.clone());
        Ok(membership)
    }

    async fn find_users_for_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<User>, AppError> {
        let user_ids: Vec<i64> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.organization_id == organization_id)
            .map(|l| l.user_id)
            .collect();

        let mut members: Vec<User> = user_ids.iter().filter_map(|id| self.users.get(*id)).collect();
        members.sort_by_key(|u| u.id);
        Ok(members)
    }
}

/// Repositories backing a test state, for asserting on stored rows directly.
pub struct TestRepos {
    pub users: Arc<InMemoryUserRepository>,
    pub organizations: Arc<InMemoryOrganizationRepository>,
    pub memberships: Arc<InMemoryMembershipRepository>,
}

pub fn create_test_state() -> (AppState, TestRepos) {
    let users = Arc::new(InMemoryUserRepository::new());
    let organizations = Arc::new(InMemoryOrganizationRepository::new());
    let memberships = Arc::new(InMemoryMembershipRepository::new(users.clone()));

    let user_service = Arc::new(UserService::new(users.clone()));
    let organization_service = Arc::new(OrganizationService::new(organizations.clone()));
    let membership_service = Arc::new(MembershipService::new(
        organizations.clone(),
        users.clone(),
        memberships.clone(),
    ));

    let state = AppState::new(user_service, organization_service, membership_service);
    let repos = TestRepos {
        users,
        organizations,
        memberships,
    };

    (state, repos)
}

pub fn make_server() -> (TestServer, TestRepos) {
    let (state, repos) = create_test_state();
    let app = axum::Router::new()
        .route("/health", axum::routing::get(health_handler))
        .merge(directory_routes())
        .with_state(state);
    (TestServer::new(app).unwrap(), repos)
}
