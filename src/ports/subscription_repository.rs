//! Subscription repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::Subscription;

/// Port for reading subscription rows.
///
/// This service never writes subscription state - the billing provider's
/// webhooks own mutation (handled elsewhere). Cancel requests go through
/// the `PaymentProvider` port instead.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Find the user's subscription row, if any.
    ///
    /// A user has at most one; absence means implicit free tier.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError>;
}
