//! Router for cron analytics endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::aggregate;
use crate::adapters::http::AppState;

/// Analytics routes, mounted at `/api/analytics` behind the cron guard.
///
/// - `POST /aggregate` - queue an aggregation run
pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/aggregate", post(aggregate))
}
