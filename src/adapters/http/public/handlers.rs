//! HTTP handlers for public, unauthenticated endpoints.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use once_cell::sync::Lazy;

use crate::adapters::http::envelope::DataEnvelope;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;

/// GET /api/public/featured - the landing-page content block.
pub async fn featured(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let content = state.featured.featured().await?;
    Ok(Json(DataEnvelope::new(content)))
}

static WEB_MANIFEST: Lazy<serde_json::Value> = Lazy::new(|| {
    serde_json::json!({
        "name": "CouponHub",
        "short_name": "CouponHub",
        "description": "Find and manage coupons from your favorite stores",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": "#16a34a",
        "icons": [
            {
                "src": "/icons/icon-192.png",
                "sizes": "192x192",
                "type": "image/png"
            },
            {
                "src": "/icons/icon-512.png",
                "sizes": "512x512",
                "type": "image/png"
            }
        ]
    })
});

/// GET /manifest.webmanifest - the PWA manifest.
///
/// Served raw, not wrapped in the API envelope; browsers consume this
/// directly.
pub async fn web_manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(WEB_MANIFEST.clone()),
    )
}
