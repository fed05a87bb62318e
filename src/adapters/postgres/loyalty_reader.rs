//! PostgreSQL implementation of LoyaltyReader.
//!
//! Balances are aggregated from the loyalty ledger on read; no running
//! totals are stored.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{LoyaltyReader, PointsSummary};

/// PostgreSQL implementation of the LoyaltyReader port.
#[derive(Clone)]
pub struct PostgresLoyaltyReader {
    pool: PgPool,
}

impl PostgresLoyaltyReader {
    /// Creates a new PostgresLoyaltyReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoyaltyReader for PostgresLoyaltyReader {
    async fn points_summary(&self, user_id: &UserId) -> Result<PointsSummary, DomainError> {
        // COALESCE gives a user with no ledger rows an all-zero summary.
        let (total, pending, available, expiring): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(points) FILTER (WHERE status != 'revoked'), 0) AS total,
                COALESCE(SUM(points) FILTER (WHERE status = 'pending'), 0) AS pending,
                COALESCE(SUM(points) FILTER (
                    WHERE status = 'settled'
                      AND (expires_at IS NULL OR expires_at > NOW())
                ), 0) AS available,
                COALESCE(SUM(points) FILTER (
                    WHERE status = 'settled'
                      AND expires_at IS NOT NULL
                      AND expires_at > NOW()
                      AND expires_at <= NOW() + INTERVAL '30 days'
                ), 0) AS expiring
            FROM loyalty_ledger
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to aggregate loyalty points: {}", e),
            )
        })?;

        Ok(PointsSummary {
            total,
            pending,
            available,
            expiring,
        })
    }
}
