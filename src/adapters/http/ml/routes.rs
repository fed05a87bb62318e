//! Router for ML endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{recommendations, track_behavior};
use crate::adapters::http::AppState;

/// ML routes, mounted at `/api/ml`.
///
/// - `POST /behavior` - record a behavior event (501 until an engine exists)
/// - `POST /recommendations` - personalized recommendations (501 likewise)
pub fn ml_routes() -> Router<AppState> {
    Router::new()
        .route("/behavior", post(track_behavior))
        .route("/recommendations", post(recommendations))
}
