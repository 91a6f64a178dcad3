//! PostgreSQL implementation of the membership repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Membership, NewMembership, User};
use crate::domain::repositories::MembershipRepository;
use crate::error::AppError;

use super::pg_user_repository::UserRow;

/// Row shape for the `memberships` table.
#[derive(sqlx::FromRow)]
struct MembershipRow {
    id: i64,
    organization_id: i64,
    user_id: i64,
    unique_idx: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MembershipRow> for Membership {
    fn from(row: MembershipRow) -> Self {
        Membership {
            id: row.id,
            organization_id: row.organization_id,
            user_id: row.user_id,
            unique_idx: row.unique_idx,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for user-organization links.
///
/// Duplicate links hit the unique index on (organization_id, user_id,
/// unique_idx) and surface as [`AppError::Conflict`] through the
/// unique-violation mapping.
pub struct PgMembershipRepository {
    pool: Arc<PgPool>,
}

impl PgMembershipRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    async fn create(&self, new_membership: NewMembership) -> Result<Membership, AppError> {
        let unique_idx = new_membership.unique_idx();

        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            INSERT INTO memberships (organization_id, user_id, unique_idx)
            VALUES ($1, $2, $3)
            RETURNING id, organization_id, user_id, unique_idx, created_at, updated_at
            "#,
        )
        .bind(new_membership.organization_id)
        .bind(new_membership.user_id)
        .bind(unique_idx)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_users_for_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.email, u.first_name, u.last_name, u.created_at, u.updated_at
            FROM users u
            JOIN memberships m ON m.user_id = u.id
            WHERE m.organization_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(organization_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
