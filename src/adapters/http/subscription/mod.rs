//! Subscription and billing HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use routes::{billing_routes, subscription_routes};
