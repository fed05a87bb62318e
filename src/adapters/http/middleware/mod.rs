//! HTTP middleware.

mod auth;
mod cron;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use cron::{cron_guard, CronState};
