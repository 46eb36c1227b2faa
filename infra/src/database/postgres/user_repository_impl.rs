//! PostgreSQL implementation of the UserRepository trait.
//!
//! Username and email uniqueness is enforced by the `users_username_key`
//! and `users_email_key` constraints; a violation surfaces as
//! `AuthError::UserAlreadyExists` naming the offending field.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::user::User;
use sh_core::errors::{AuthError, DomainError};
use sh_core::repositories::UserRepository;

use super::{column_failed, query_failed};

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| column_failed("id", e))?,
            username: row
                .try_get("username")
                .map_err(|e| column_failed("username", e))?,
            email: row.try_get("email").map_err(|e| column_failed("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column_failed("password_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_failed("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_failed("updated_at", e))?,
        })
    }

    async fn exists_where(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM users WHERE {} = $1) AS found", column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to check user existence", e))?;

        row.try_get("found").map_err(|e| column_failed("found", e))
    }
}

/// Translate a unique violation into the field it concerns
fn map_insert_error(error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let field = match db_error.constraint() {
                Some("users_username_key") => "username",
                _ => "email",
            };
            return AuthError::UserAlreadyExists {
                field: field.to_string(),
            }
            .into();
        }
    }
    query_failed("Failed to create user", error)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user by id", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user by email", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {} FROM users WHERE id = ANY($1)", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists_where("email", email).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.exists_where("username", username).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Self::row_to_user(&row)
    }
}
