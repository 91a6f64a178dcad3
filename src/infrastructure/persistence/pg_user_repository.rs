//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::error::AppError;

/// Row shape for the `users` table.
#[derive(sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            row.id,
            row.email,
            row.first_name,
            row.last_name,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for users.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(new_user.email)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self, filter: UserFilter) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE ($1::TEXT IS NULL OR email = $1)
              AND ($2::TEXT IS NULL OR first_name = $2)
              AND ($3::TEXT IS NULL OR last_name = $3)
            ORDER BY id
            "#,
        )
        .bind(filter.email)
        .bind(filter.first_name)
        .bind(filter.last_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError> {
        // RETURNING + fetch_optional keeps the matched-row count observable:
        // None means zero rows matched and the caller decides 200 vs 404.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                email      = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name  = COALESCE($4, last_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.email)
        .bind(update.first_name)
        .bind(update.last_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
