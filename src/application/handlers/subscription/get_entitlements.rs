//! GetEntitlementsHandler - query handler for tier limits.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::{SubscriptionTier, TierLimits};
use crate::ports::SubscriptionRepository;

/// Query for a user's current usage limits.
#[derive(Debug, Clone)]
pub struct GetEntitlementsQuery {
    pub user_id: UserId,
}

/// Handler resolving a user to their tier limits.
///
/// Every registered user implicitly has free-tier entitlement, so a
/// missing subscription row resolves to the free limits table entry rather
/// than an error. Limits are derived, never persisted.
pub struct GetEntitlementsHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetEntitlementsHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(&self, query: GetEntitlementsQuery) -> Result<TierLimits, DomainError> {
        let tier = self
            .subscriptions
            .find_by_user(&query.user_id)
            .await?
            .map(|sub| sub.entitled_tier())
            .unwrap_or(SubscriptionTier::Free);

        Ok(TierLimits::for_tier(tier))
    }
}
