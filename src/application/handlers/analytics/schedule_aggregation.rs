//! ScheduleAggregationHandler - queues analytics aggregation jobs.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, JobId};
use crate::ports::{AggregationJob, JobScheduler};

/// Handler that enqueues aggregation work for the background worker.
///
/// Aggregation itself runs out of process; this handler only validates
/// nothing (any filter combination is legal, including none) and queues.
pub struct ScheduleAggregationHandler {
    scheduler: Arc<dyn JobScheduler>,
}

impl ScheduleAggregationHandler {
    pub fn new(scheduler: Arc<dyn JobScheduler>) -> Self {
        Self { scheduler }
    }

    pub async fn handle(&self, job: AggregationJob) -> Result<JobId, DomainError> {
        let job_id = self.scheduler.enqueue_aggregation(job.clone()).await?;

        tracing::info!(
            job_id = %job_id,
            coupons = job.coupon_ids.len(),
            stores = job.store_ids.len(),
            date = ?job.date,
            "Analytics aggregation job queued"
        );

        Ok(job_id)
    }
}
