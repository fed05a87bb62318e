//! HTTP handlers for ML endpoints.
//!
//! The recommendation engine is an explicit capability boundary: the stub
//! adapter answers `NotImplemented` and these handlers surface that as
//! 501, so clients see the missing capability instead of a silent accept.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::envelope::DataEnvelope;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::ports::{BehaviorEvent, RecommendationRequest};

use super::dto::{RecommendationsRequest, TrackBehaviorRequest};

/// POST /api/ml/behavior - record a behavior event.
pub async fn track_behavior(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: TrackBehaviorRequest = serde_json::from_slice(&body).unwrap_or_default();

    let event = BehaviorEvent {
        user_id: user.user_id,
        event_type: request.event_type.unwrap_or_default(),
        coupon_id: request.coupon_id,
        store_id: request.store_id,
        category_id: request.category_id,
        query: request.query,
        metadata: request.metadata,
    };

    state.recommendations.record_behavior(event).await?;

    Ok(Json(crate::adapters::http::envelope::MessageEnvelope::new(
        "Behavior recorded",
    )))
}

/// POST /api/ml/recommendations - personalized coupon recommendations.
pub async fn recommendations(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: RecommendationsRequest = serde_json::from_slice(&body).unwrap_or_default();

    let set = state
        .recommendations
        .recommend(RecommendationRequest {
            user_id: user.user_id,
            context: request.context,
            limit: request.limit,
        })
        .await?;

    Ok(Json(DataEnvelope::new(set)))
}
