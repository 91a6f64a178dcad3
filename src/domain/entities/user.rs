//! User entity.

use chrono::{DateTime, Utc};

/// A directory user.
///
/// Users may belong to any number of organizations through
/// [`super::Membership`] rows. The `id` is assigned by the database and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        email: String,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
