//! Redis-backed job queue for analytics aggregation.
//!
//! Jobs are LPUSHed onto a list; the aggregation worker BRPOPs from the
//! other end. The envelope carries a job id so worker logs correlate with
//! the enqueue log line here.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, JobId};
use crate::ports::{AggregationJob, JobScheduler};

const AGGREGATION_QUEUE: &str = "jobs:analytics:aggregate";

/// Queued envelope around an aggregation job.
#[derive(Debug, Serialize, Deserialize)]
struct JobEnvelope {
    id: JobId,
    #[serde(flatten)]
    job: AggregationJob,
}

/// Redis implementation of the JobScheduler port.
#[derive(Clone)]
pub struct RedisJobQueue {
    conn: MultiplexedConnection,
}

impl RedisJobQueue {
    /// Create a new Redis job queue.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl JobScheduler for RedisJobQueue {
    async fn enqueue_aggregation(&self, job: AggregationJob) -> Result<JobId, DomainError> {
        let job_id = JobId::new();
        let envelope = JobEnvelope { id: job_id, job };

        let payload = serde_json::to_string(&envelope).map_err(|e| {
            DomainError::new(
                ErrorCode::QueueError,
                format!("Failed to serialize job: {}", e),
            )
        })?;

        let mut conn = self.conn.clone();
        conn.lpush::<_, _, ()>(AGGREGATION_QUEUE, payload)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::new(
                    ErrorCode::QueueError,
                    format!("Failed to enqueue job: {}", e),
                )
            })?;

        Ok(job_id)
    }
}

impl std::fmt::Debug for RedisJobQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisJobQueue").finish_non_exhaustive()
    }
}
