//! Cron endpoint guard.
//!
//! Scheduled-job endpoints are protected by a shared secret rather than a
//! user session: the scheduler sends `Authorization: Bearer <secret>`.
//! The comparison is constant-time. When no secret is configured (local
//! development), every request is accepted.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::adapters::http::envelope::ErrorEnvelope;

/// Cron middleware state - the configured secret, if any.
pub type CronState = Arc<Option<Secret<String>>>;

/// Rejects cron requests whose bearer secret does not match.
pub async fn cron_guard(
    State(secret): State<CronState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(secret) = secret.as_ref() else {
        return next.run(request).await;
    };

    let authorized = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|presented| {
            presented
                .as_bytes()
                .ct_eq(secret.expose_secret().as_bytes())
                .into()
        })
        .unwrap_or(false);

    if authorized {
        next.run(request).await
    } else {
        tracing::warn!("Cron request rejected: bad or missing secret");
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorEnvelope::new("Authentication required")),
        )
            .into_response()
    }
}
