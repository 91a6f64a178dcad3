//! PostgreSQL implementation of the organization repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOrganization, Organization, UpdateOrganization};
use crate::domain::repositories::{OrganizationFilter, OrganizationRepository};
use crate::error::AppError;

/// Row shape for the `organizations` table.
#[derive(sqlx::FromRow)]
struct OrganizationRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrganizationRow> for Organization {
    fn from(row: OrganizationRow) -> Self {
        Organization::new(row.id, row.name, row.created_at, row.updated_at)
    }
}

/// PostgreSQL repository for organizations.
pub struct PgOrganizationRepository {
    pool: Arc<PgPool>,
}

impl PgOrganizationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            INSERT INTO organizations (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_organization.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, AppError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError> {
        let rows = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM organizations
            WHERE ($1::TEXT IS NULL OR name = $1)
            ORDER BY id
            "#,
        )
        .bind(filter.name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(
        &self,
        id: i64,
        update: UpdateOrganization,
    ) -> Result<Option<Organization>, AppError> {
        // None from fetch_optional means zero rows matched the id.
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            UPDATE organizations SET
                name       = COALESCE($2, name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
