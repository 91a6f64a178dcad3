//! Membership join entity linking users to organizations.

use chrono::{DateTime, Utc};

/// One user-to-organization link.
///
/// Rows are created only as a side effect of adding a member to an
/// organization; they are never updated afterwards. The `unique_idx` column
/// backs the uniqueness constraint preventing duplicate memberships for the
/// same (organization, user) pair.
#[derive(Debug, Clone)]
pub struct Membership {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub unique_idx: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new membership link.
#[derive(Debug, Clone)]
pub struct NewMembership {
    pub organization_id: i64,
    pub user_id: i64,
}

impl NewMembership {
    pub fn new(organization_id: i64, user_id: i64) -> Self {
        Self {
            organization_id,
            user_id,
        }
    }

    /// Deterministic index value for the uniqueness constraint.
    pub fn unique_idx(&self) -> String {
        format!("{}:{}", self.organization_id, self.user_id)
    }
}
