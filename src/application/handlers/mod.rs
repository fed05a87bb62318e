//! Command and query handlers, one module per bounded area.

pub mod analytics;
pub mod auth;
pub mod subscription;
