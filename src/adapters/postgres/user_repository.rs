//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::User;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.username())
        .bind(user.password_hash())
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return DomainError::new(
                        ErrorCode::Conflict,
                        format!("Username already exists: {}", user.username()),
                    );
                }
            }
            DomainError::database(format!("Failed to insert user: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let get_err = |e: sqlx::Error| DomainError::database(format!("Invalid user row: {}", e));
        let id: String = row.try_get("id").map_err(get_err)?;
        let username: String = row.try_get("username").map_err(get_err)?;
        let password_hash: String = row.try_get("password_hash").map_err(get_err)?;
        let created_at: chrono::DateTime<chrono::Utc> =
            row.try_get("created_at").map_err(get_err)?;

        let id = UserId::new(id)
            .map_err(|e| DomainError::database(format!("Invalid user id: {}", e)))?;

        Ok(Some(User::reconstitute(
            id,
            username,
            password_hash,
            Timestamp::from_datetime(created_at),
        )))
    }
}
