//! Router for public endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::featured;
use crate::adapters::http::AppState;

/// Public routes, mounted at `/api/public`. No authentication.
///
/// - `GET /featured` - featured coupons, trending stores, categories
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/featured", get(featured))
}
