//! HTTP adapters - REST API implementation.
//!
//! Each area has its own module with handlers and routes; they all share
//! one `AppState` of Arc'd ports. `api_router` assembles the full surface
//! with the auth and cron middleware in place.

pub mod analytics;
pub mod auth;
pub mod envelope;
pub mod error;
pub mod loyalty;
pub mod middleware;
pub mod ml;
pub mod public;
pub mod subscription;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use secrecy::Secret;

use crate::application::handlers::analytics::ScheduleAggregationHandler;
use crate::application::handlers::auth::{LogoutHandler, ValidateSessionHandler};
use crate::application::handlers::subscription::{
    BillingPortalHandler, CancelSubscriptionHandler, GetEntitlementsHandler,
};
use crate::ports::{
    FeaturedReader, JobScheduler, LoyaltyReader, PaymentProvider, RecommendationEngine,
    SessionCache, SessionStore, SubscriptionRepository,
};

pub use error::ApiError;
pub use middleware::{auth_middleware, cron_guard, AuthState, CronState, RequireAuth};

/// Shared application state: Arc-wrapped ports plus read-only config.
///
/// Cloned per request; handlers are constructed on demand from the state.
#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn SessionStore>,
    pub session_cache: Arc<dyn SessionCache>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub payment: Arc<dyn PaymentProvider>,
    pub recommendations: Arc<dyn RecommendationEngine>,
    pub loyalty: Arc<dyn LoyaltyReader>,
    pub featured: Arc<dyn FeaturedReader>,
    pub scheduler: Arc<dyn JobScheduler>,
    pub portal_return_url: String,
}

impl AppState {
    pub fn validate_session_handler(&self) -> ValidateSessionHandler {
        ValidateSessionHandler::new(self.session_store.clone(), self.session_cache.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.session_store.clone(), self.session_cache.clone())
    }

    pub fn entitlements_handler(&self) -> GetEntitlementsHandler {
        GetEntitlementsHandler::new(self.subscriptions.clone())
    }

    pub fn cancel_subscription_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.subscriptions.clone(), self.payment.clone())
    }

    pub fn billing_portal_handler(&self) -> BillingPortalHandler {
        BillingPortalHandler::new(self.subscriptions.clone(), self.payment.clone())
    }

    pub fn aggregation_handler(&self) -> ScheduleAggregationHandler {
        ScheduleAggregationHandler::new(self.scheduler.clone())
    }
}

/// Assembles the complete API router.
///
/// Session middleware wraps the authenticated surface; the analytics
/// routes sit behind the cron guard instead. Public routes and the
/// manifest are mounted outside both, so a stale token in a browser's
/// storage never blocks the landing page.
pub fn api_router(state: AppState, cron_secret: Option<Secret<String>>) -> Router {
    let auth_state: AuthState = Arc::new(state.validate_session_handler());
    let cron_state: CronState = Arc::new(cron_secret);

    let session_api = Router::new()
        .nest("/auth", auth::auth_routes())
        .nest("/loyalty", loyalty::loyalty_routes())
        .nest("/ml", ml::ml_routes())
        .nest("/subscription", subscription::subscription_routes())
        .nest("/billing", subscription::billing_routes())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    let public_api = Router::new().nest("/public", public::public_routes());

    let cron_api = Router::new()
        .nest("/analytics", analytics::analytics_routes())
        .layer(axum::middleware::from_fn_with_state(cron_state, cron_guard));

    Router::new()
        .nest("/api", session_api.merge(public_api).merge(cron_api))
        .route("/manifest.webmanifest", get(public::web_manifest))
        .with_state(state)
}
