//! Public HTTP endpoints.

mod handlers;
mod routes;

pub use handlers::web_manifest;
pub use routes::public_routes;
