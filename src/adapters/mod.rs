//! Adapters - concrete implementations of the ports.
//!
//! Grouped by technology: `postgres` for persistence, `redis` for the
//! session mirror and job queue, `stripe` for billing, `ml` for the
//! recommendation stub, `http` for the REST surface.

pub mod http;
pub mod ml;
pub mod postgres;
pub mod redis;
pub mod stripe;
