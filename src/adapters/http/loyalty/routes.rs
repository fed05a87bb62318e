//! Router for loyalty endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::points_summary;
use crate::adapters::http::AppState;

/// Loyalty routes, mounted at `/api/loyalty`.
///
/// - `GET /points/summary` - aggregated point balances
pub fn loyalty_routes() -> Router<AppState> {
    Router::new().route("/points/summary", get(points_summary))
}
