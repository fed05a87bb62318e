//! Loyalty HTTP endpoints.

mod handlers;
mod routes;

pub use routes::loyalty_routes;
