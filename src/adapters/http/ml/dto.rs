//! HTTP DTOs for the ML endpoints.
//!
//! Both endpoints tolerate missing or malformed bodies: clients send these
//! fire-and-forget and the capability behind them is not live yet, so the
//! body degrades to its default instead of rejecting with 422.

use serde::Deserialize;

/// Body for POST /api/ml/behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackBehaviorRequest {
    pub event_type: Option<String>,
    pub coupon_id: Option<String>,
    pub store_id: Option<String>,
    pub category_id: Option<String>,
    pub query: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Body for POST /api/ml/recommendations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationsRequest {
    pub context: Option<String>,
    pub limit: Option<u32>,
}
