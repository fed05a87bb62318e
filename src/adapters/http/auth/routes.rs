//! Router for auth endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::logout;
use crate::adapters::http::AppState;

/// Auth routes, mounted at `/api/auth`.
///
/// - `POST /logout` - invalidate all sessions and refresh tokens
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}
