//! Recommendation engine port.
//!
//! Behavior tracking and coupon recommendations are a planned capability:
//! the HTTP surface exists, but no engine is wired in yet. The port makes
//! that boundary explicit - the stub adapter answers `NotImplemented`
//! instead of silently accepting and discarding data, so missing
//! functionality cannot be masked in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Port for behavior tracking and coupon recommendations.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Record a user behavior event for model training.
    async fn record_behavior(&self, event: BehaviorEvent) -> Result<(), RecommendationError>;

    /// Produce personalized coupon recommendations.
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationSet, RecommendationError>;
}

/// A tracked user behavior event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorEvent {
    pub user_id: UserId,
    pub event_type: String,
    pub coupon_id: Option<String>,
    pub store_id: Option<String>,
    pub category_id: Option<String>,
    pub query: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Parameters for a recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: UserId,
    pub context: Option<String>,
    pub limit: Option<u32>,
}

/// A set of generated recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub user_id: UserId,
    pub context: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// A single recommended coupon with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub coupon_id: String,
    pub score: f64,
    pub reason: Option<String>,
}

/// Errors from the recommendation engine.
#[derive(Debug, Clone, Error)]
pub enum RecommendationError {
    /// The capability is not implemented yet.
    #[error("Recommendation engine is not implemented")]
    NotImplemented,

    /// The engine exists but could not be reached.
    #[error("Recommendation engine unavailable: {0}")]
    Unavailable(String),
}
