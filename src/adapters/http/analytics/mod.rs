//! Cron analytics HTTP endpoints.

mod handlers;
mod routes;

pub use routes::analytics_routes;
