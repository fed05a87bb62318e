//! Stub recommendation engine.
//!
//! Answers `NotImplemented` for every operation so the missing capability
//! surfaces as an explicit 501 instead of silently dropped data.

use async_trait::async_trait;

use crate::ports::{
    BehaviorEvent, RecommendationEngine, RecommendationError, RecommendationRequest,
    RecommendationSet,
};

/// Placeholder engine used until a real recommendation backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedRecommendationEngine;

impl UnimplementedRecommendationEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecommendationEngine for UnimplementedRecommendationEngine {
    async fn record_behavior(&self, event: BehaviorEvent) -> Result<(), RecommendationError> {
        tracing::debug!(
            user_id = %event.user_id,
            event_type = %event.event_type,
            "Behavior event received but no engine is configured"
        );
        Err(RecommendationError::NotImplemented)
    }

    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationSet, RecommendationError> {
        tracing::debug!(
            user_id = %request.user_id,
            "Recommendation requested but no engine is configured"
        );
        Err(RecommendationError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn record_behavior_is_not_implemented() {
        let engine = UnimplementedRecommendationEngine::new();
        let result = engine
            .record_behavior(BehaviorEvent {
                user_id: UserId::new(),
                event_type: "coupon_view".to_string(),
                coupon_id: None,
                store_id: None,
                category_id: None,
                query: None,
                metadata: None,
            })
            .await;
        assert!(matches!(result, Err(RecommendationError::NotImplemented)));
    }

    #[tokio::test]
    async fn recommend_is_not_implemented() {
        let engine = UnimplementedRecommendationEngine::new();
        let result = engine
            .recommend(RecommendationRequest {
                user_id: UserId::new(),
                context: None,
                limit: Some(10),
            })
            .await;
        assert!(matches!(result, Err(RecommendationError::NotImplemented)));
    }
}
