//! CancelSubscriptionHandler - schedules end-of-period cancellation.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::{PaymentProvider, SubscriptionRepository};

/// Command to cancel the caller's subscription at period end.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Outcome of a scheduled cancellation.
#[derive(Debug, Clone)]
pub struct CancellationOutcome {
    /// When paid access ends, as reported by the billing provider.
    pub effective_at: Option<DateTime<Utc>>,
}

/// Handler scheduling a cancellation with the billing provider.
///
/// This never terminates access immediately and never mutates the local
/// subscription row. The provider is told to cancel at period end; the
/// resulting state change flows back through its webhooks, which are the
/// only writer of subscription rows.
pub struct CancelSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    payment: Arc<dyn PaymentProvider>,
}

impl CancelSubscriptionHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        payment: Arc<dyn PaymentProvider>,
    ) -> Self {
        Self {
            subscriptions,
            payment,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancellationOutcome, SubscriptionError> {
        let subscription = self
            .subscriptions
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or(SubscriptionError::NoActiveSubscription(cmd.user_id))?;

        if subscription.cancel_at_period_end {
            return Err(SubscriptionError::AlreadyPendingCancellation(cmd.user_id));
        }

        let stripe_subscription_id = match (
            subscription.status.is_cancellable(),
            &subscription.stripe_subscription_id,
        ) {
            (true, Some(id)) => id,
            _ => return Err(SubscriptionError::NoActiveSubscription(cmd.user_id)),
        };

        let provider_sub = self
            .payment
            .cancel_at_period_end(stripe_subscription_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    user_id = %cmd.user_id,
                    error = %e,
                    "Provider rejected cancellation request"
                );
                SubscriptionError::PaymentFailed(e.message)
            })?;

        tracing::info!(
            user_id = %cmd.user_id,
            period_end = provider_sub.current_period_end,
            "Subscription scheduled for cancellation at period end"
        );

        Ok(CancellationOutcome {
            effective_at: Utc.timestamp_opt(provider_sub.current_period_end, 0).single(),
        })
    }
}
