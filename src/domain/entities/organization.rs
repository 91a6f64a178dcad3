//! Organization entity.

use chrono::{DateTime, Utc};

/// An organization users can belong to.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new Organization instance.
    pub fn new(
        id: i64,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new organization.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
}

/// Partial update for an existing organization.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrganization {
    pub name: Option<String>,
}
