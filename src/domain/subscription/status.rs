//! Subscription status as reconciled from the billing provider.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a subscription.
///
/// Authority for the status lives with the billing provider; this service
/// only reads it. Cancellation is a soft transition
/// (`Active -> PendingCancellation`) applied asynchronously via webhook,
/// never an immediate delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is active and current.
    Active,

    /// Cancellation scheduled for the end of the billing period; access
    /// remains valid until then.
    PendingCancellation,

    /// Payment is past due, grace period active.
    PastDue,

    /// Subscription has ended.
    Canceled,

    /// Initial payment incomplete.
    Incomplete,
}

impl SubscriptionStatus {
    /// Check if the subscription currently grants paid-tier access.
    pub fn has_access(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Active
                | SubscriptionStatus::PendingCancellation
                | SubscriptionStatus::PastDue
        )
    }

    /// Check if a cancel request can be issued from this status.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Active | SubscriptionStatus::PastDue
        )
    }
}
