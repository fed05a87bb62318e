//! HTTP handlers for subscription and billing endpoints.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::envelope::{DataEnvelope, MessageEnvelope};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::subscription::{
    BillingPortalCommand, CancelSubscriptionCommand, GetEntitlementsQuery,
};

use super::dto::PortalResponse;

/// GET /api/subscription/limits - the caller's tier limits.
pub async fn get_limits(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.entitlements_handler();
    let limits = handler
        .handle(GetEntitlementsQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(DataEnvelope::new(limits)))
}

/// POST /api/subscription/cancel - schedule end-of-period cancellation.
pub async fn cancel(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.cancel_subscription_handler();
    let outcome = handler
        .handle(CancelSubscriptionCommand {
            user_id: user.user_id,
        })
        .await?;

    tracing::info!(
        user_id = %user.user_id,
        effective_at = ?outcome.effective_at,
        "Cancellation confirmed to client"
    );

    Ok(Json(MessageEnvelope::new(
        "Subscription will be canceled at the end of the current billing period",
    )))
}

/// POST /api/billing/portal - open a provider-hosted billing portal.
pub async fn billing_portal(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.billing_portal_handler();
    let session = handler
        .handle(BillingPortalCommand {
            user_id: user.user_id,
            return_url: state.portal_return_url.clone(),
        })
        .await?;

    Ok(Json(DataEnvelope::new(PortalResponse { url: session.url })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{test_state, StubSubscriptionRepository};
    use crate::domain::foundation::{AuthenticatedUser, SubscriptionId, UserId};
    use crate::domain::subscription::{Subscription, SubscriptionStatus, SubscriptionTier};
    use chrono::Utc;
    use std::sync::Arc;

    fn active_subscription(user_id: UserId) -> Subscription {
        Subscription {
            id: SubscriptionId::new(),
            user_id,
            tier: SubscriptionTier::Pro,
            status: SubscriptionStatus::Active,
            stripe_subscription_id: Some("sub_test123".to_string()),
            stripe_customer_id: Some("cus_test123".to_string()),
            cancel_at_period_end: false,
            current_period_end: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn limits_default_to_free_tier() {
        let state = test_state();
        let user = AuthenticatedUser::new(UserId::new());

        let result = get_limits(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn cancel_without_subscription_is_bad_request() {
        let state = test_state();
        let user = AuthenticatedUser::new(UserId::new());

        let result = cancel(State(state), RequireAuth(user)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn cancel_with_active_subscription_succeeds() {
        let user_id = UserId::new();
        let state = AppState {
            subscriptions: Arc::new(StubSubscriptionRepository {
                subscription: Some(active_subscription(user_id)),
            }),
            ..test_state()
        };
        let user = AuthenticatedUser::new(user_id);

        let result = cancel(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn portal_without_customer_is_bad_request() {
        let state = test_state();
        let user = AuthenticatedUser::new(UserId::new());

        let result = billing_portal(State(state), RequireAuth(user)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn portal_with_customer_returns_url() {
        let user_id = UserId::new();
        let state = AppState {
            subscriptions: Arc::new(StubSubscriptionRepository {
                subscription: Some(active_subscription(user_id)),
            }),
            ..test_state()
        };
        let user = AuthenticatedUser::new(user_id);

        let result = billing_portal(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }
}
