//! Subscription aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubscriptionId, UserId};

use super::{SubscriptionStatus, SubscriptionTier};

/// A user's subscription row.
///
/// At most one active subscription exists per user. This service reads the
/// row and asks the billing provider to schedule cancellations; it never
/// mutates the status locally - the provider's webhooks reconcile state
/// asynchronously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,

    /// Billing provider subscription reference (sub_...).
    pub stripe_subscription_id: Option<String>,

    /// Billing provider customer reference (cus_...).
    pub stripe_customer_id: Option<String>,

    /// Whether the provider has the subscription marked to end at period
    /// close.
    pub cancel_at_period_end: bool,

    /// End of the current billing period.
    pub current_period_end: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Check if this subscription currently grants its tier's entitlements.
    pub fn has_access(&self) -> bool {
        self.status.has_access()
    }

    /// The tier whose limits apply right now.
    ///
    /// A subscription without access (ended, incomplete) entitles the user
    /// to nothing beyond the implicit free tier.
    pub fn entitled_tier(&self) -> SubscriptionTier {
        if self.has_access() {
            self.tier
        } else {
            SubscriptionTier::Free
        }
    }

    /// Check if a cancel request can be issued for this subscription.
    ///
    /// Requires a provider subscription reference and a status that has not
    /// already been scheduled for cancellation.
    pub fn is_cancellable(&self) -> bool {
        self.status.is_cancellable()
            && !self.cancel_at_period_end
            && self.stripe_subscription_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_subscription(tier: SubscriptionTier) -> Subscription {
        Subscription {
            id: SubscriptionId::new(),
            user_id: UserId::new(),
            tier,
            status: SubscriptionStatus::Active,
            stripe_subscription_id: Some("sub_test123".to_string()),
            stripe_customer_id: Some("cus_test123".to_string()),
            cancel_at_period_end: false,
            current_period_end: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn active_subscription_entitles_its_tier() {
        let sub = active_subscription(SubscriptionTier::Pro);
        assert_eq!(sub.entitled_tier(), SubscriptionTier::Pro);
    }

    #[test]
    fn ended_subscription_falls_back_to_free() {
        let mut sub = active_subscription(SubscriptionTier::Pro);
        sub.status = SubscriptionStatus::Canceled;
        assert_eq!(sub.entitled_tier(), SubscriptionTier::Free);
    }

    #[test]
    fn pending_cancellation_keeps_paid_entitlements() {
        // Currently-paid access remains valid until period end.
        let mut sub = active_subscription(SubscriptionTier::Basic);
        sub.status = SubscriptionStatus::PendingCancellation;
        sub.cancel_at_period_end = true;
        assert_eq!(sub.entitled_tier(), SubscriptionTier::Basic);
    }

    #[test]
    fn active_subscription_is_cancellable() {
        assert!(active_subscription(SubscriptionTier::Basic).is_cancellable());
    }

    #[test]
    fn already_scheduled_cancellation_is_not_cancellable() {
        let mut sub = active_subscription(SubscriptionTier::Basic);
        sub.cancel_at_period_end = true;
        assert!(!sub.is_cancellable());
    }

    #[test]
    fn missing_provider_reference_is_not_cancellable() {
        let mut sub = active_subscription(SubscriptionTier::Basic);
        sub.stripe_subscription_id = None;
        assert!(!sub.is_cancellable());
    }
}
