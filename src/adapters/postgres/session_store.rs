//! PostgreSQL implementation of SessionStore.
//!
//! Sessions and refresh tokens live in separate tables; both are removed
//! on logout inside one transaction so a user is never left half
//! invalidated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::session::{AuthSession, InvalidatedCredentials};
use crate::ports::SessionStore;

/// PostgreSQL implementation of the SessionStore port.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    user_id: Uuid,
    token: String,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for AuthSession {
    fn from(row: SessionRow) -> Self {
        AuthSession {
            user_id: UserId::from_uuid(row.user_id),
            token: row.token,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn find_valid(&self, token: &str) -> Result<Option<AuthSession>, DomainError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT user_id, token, expires_at
            FROM sessions
            WHERE token = $1 AND expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        Ok(row.map(AuthSession::from))
    }

    async fn delete_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<InvalidatedCredentials, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        let sessions = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete sessions: {}", e),
                )
            })?
            .rows_affected();

        let refresh_tokens = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete refresh tokens: {}", e),
                )
            })?
            .rows_affected();

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit credential deletion: {}", e),
            )
        })?;

        Ok(InvalidatedCredentials {
            sessions,
            refresh_tokens,
        })
    }
}
