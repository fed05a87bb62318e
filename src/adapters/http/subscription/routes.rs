//! Routers for subscription and billing endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{billing_portal, cancel, get_limits};
use crate::adapters::http::AppState;

/// Subscription routes, mounted at `/api/subscription`.
///
/// - `GET /limits` - tier limits for the caller
/// - `POST /cancel` - schedule end-of-period cancellation
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/limits", get(get_limits))
        .route("/cancel", post(cancel))
}

/// Billing routes, mounted at `/api/billing`.
///
/// - `POST /portal` - create a provider-hosted management session
pub fn billing_routes() -> Router<AppState> {
    Router::new().route("/portal", post(billing_portal))
}
