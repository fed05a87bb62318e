//! ML HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use routes::ml_routes;
