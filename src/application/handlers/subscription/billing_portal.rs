//! BillingPortalHandler - creates a provider-hosted management session.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::{PaymentProvider, PortalSession, SubscriptionRepository};

/// Command to open a billing portal session for a user.
#[derive(Debug, Clone)]
pub struct BillingPortalCommand {
    pub user_id: UserId,
    pub return_url: String,
}

/// Handler creating a billing portal session.
///
/// Requires a billing customer record; free-tier users who never paid have
/// none and get a validation error instead of a portal link.
pub struct BillingPortalHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    payment: Arc<dyn PaymentProvider>,
}

impl BillingPortalHandler {
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
        cmd: BillingPortalCommand,
    ) -> Result<PortalSession, SubscriptionError> {
        let customer_id = self
            .subscriptions
            .find_by_user(&cmd.user_id)
            .await?
            .and_then(|sub| sub.stripe_customer_id)
            .ok_or(SubscriptionError::NoBillingCustomer(cmd.user_id))?;

        self.payment
            .create_portal_session(&customer_id, &cmd.return_url)
            .await
            .map_err(|e| {
                tracing::error!(
                    user_id = %cmd.user_id,
                    error = %e,
                    "Failed to create billing portal session"
                );
                SubscriptionError::PaymentFailed(e.message)
            })
    }
}
