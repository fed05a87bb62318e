//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Read-only by design: subscription rows are written by the billing
//! webhook processor, not by this service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{Subscription, SubscriptionStatus, SubscriptionTier};
use crate::ports::SubscriptionRepository;

/// PostgreSQL implementation of the SubscriptionRepository port.
#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    user_id: Uuid,
    tier: String,
    status: String,
    stripe_subscription_id: Option<String>,
    stripe_customer_id: Option<String>,
    cancel_at_period_end: bool,
    current_period_end: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

fn parse_tier(s: &str) -> Result<SubscriptionTier, DomainError> {
    match s.to_lowercase().as_str() {
        "free" => Ok(SubscriptionTier::Free),
        "basic" => Ok(SubscriptionTier::Basic),
        "pro" => Ok(SubscriptionTier::Pro),
        "enterprise" => Ok(SubscriptionTier::Enterprise),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid tier value: {}", s),
        )),
    }
}

fn parse_status(s: &str) -> Result<SubscriptionStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "active" => Ok(SubscriptionStatus::Active),
        "pending_cancellation" => Ok(SubscriptionStatus::PendingCancellation),
        "past_due" => Ok(SubscriptionStatus::PastDue),
        "canceled" => Ok(SubscriptionStatus::Canceled),
        "incomplete" => Ok(SubscriptionStatus::Incomplete),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            tier: parse_tier(&row.tier)?,
            status: parse_status(&row.status)?,
            stripe_subscription_id: row.stripe_subscription_id,
            stripe_customer_id: row.stripe_customer_id,
            cancel_at_period_end: row.cancel_at_period_end,
            current_period_end: row.current_period_end,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, tier, status, stripe_subscription_id,
                   stripe_customer_id, cancel_at_period_end, current_period_end,
                   created_at
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch subscription: {}", e),
            )
        })?;

        row.map(Subscription::try_from).transpose()
    }
}
