//! Job scheduler port for background analytics work.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, JobId};

/// Port for enqueueing background jobs.
///
/// Enqueueing is fire-and-forget: the scheduler returns once the job is
/// durably queued; execution happens in a separate worker outside this
/// service.
#[async_trait]
pub trait JobScheduler: Send + Sync {
    /// Queue an analytics aggregation job.
    async fn enqueue_aggregation(&self, job: AggregationJob) -> Result<JobId, DomainError>;
}

/// An analytics aggregation job payload.
///
/// Empty filters mean "aggregate everything"; a missing date defaults to
/// the current day at execution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationJob {
    #[serde(default)]
    pub coupon_ids: Vec<String>,

    #[serde(default)]
    pub store_ids: Vec<String>,

    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_scheduler_is_object_safe() {
        fn _accepts_dyn(_scheduler: &dyn JobScheduler) {}
    }

    #[test]
    fn empty_object_deserializes_to_default_job() {
        let job: AggregationJob = serde_json::from_str("{}").unwrap();
        assert_eq!(job, AggregationJob::default());
    }

    #[test]
    fn filters_deserialize_camel_case() {
        let job: AggregationJob = serde_json::from_value(serde_json::json!({
            "couponIds": ["cpn_1"],
            "storeIds": ["st_1", "st_2"],
            "date": "2026-08-01",
        }))
        .unwrap();
        assert_eq!(job.coupon_ids, vec!["cpn_1"]);
        assert_eq!(job.store_ids.len(), 2);
        assert!(job.date.is_some());
    }
}
