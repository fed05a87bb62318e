//! HTTP handlers for the cron analytics endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::adapters::http::envelope::DataEnvelope;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::ports::AggregationJob;

/// Response body for a queued aggregation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResponse {
    pub job_id: String,
    pub message: String,
}

/// POST /api/analytics/aggregate - queue an aggregation run.
///
/// The scheduler posts here with an empty or partial body; anything that
/// does not parse degrades to the default job (aggregate everything,
/// today). Authentication happens in the cron guard, not here.
pub async fn aggregate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let job: AggregationJob = serde_json::from_slice(&body).unwrap_or_default();

    let handler = state.aggregation_handler();
    let job_id = handler.handle(job).await?;

    Ok(Json(DataEnvelope::new(AggregateResponse {
        job_id: job_id.to_string(),
        message: "Aggregation job queued".to_string(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{test_state, RecordingJobScheduler};
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_body_queues_the_default_job() {
        let scheduler = Arc::new(RecordingJobScheduler::new());
        let state = AppState {
            scheduler: scheduler.clone(),
            ..test_state()
        };

        let result = aggregate(State(state), Bytes::new()).await;
        assert!(result.is_ok());

        let jobs = scheduler.jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0], AggregationJob::default());
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_default_job() {
        let scheduler = Arc::new(RecordingJobScheduler::new());
        let state = AppState {
            scheduler: scheduler.clone(),
            ..test_state()
        };

        let result = aggregate(State(state), Bytes::from_static(b"{truncated")).await;
        assert!(result.is_ok());
        assert_eq!(scheduler.jobs.lock().unwrap()[0], AggregationJob::default());
    }

    #[tokio::test]
    async fn filters_are_forwarded_to_the_scheduler() {
        let scheduler = Arc::new(RecordingJobScheduler::new());
        let state = AppState {
            scheduler: scheduler.clone(),
            ..test_state()
        };

        let body = Bytes::from_static(br#"{"couponIds": ["cpn_1"], "date": "2026-08-01"}"#);
        aggregate(State(state), body).await.unwrap();

        let jobs = scheduler.jobs.lock().unwrap();
        assert_eq!(jobs[0].coupon_ids, vec!["cpn_1"]);
        assert!(jobs[0].date.is_some());
    }
}
