//! Redis adapters.

mod job_queue;
mod session_cache;

pub use job_queue::RedisJobQueue;
pub use session_cache::RedisSessionCache;
