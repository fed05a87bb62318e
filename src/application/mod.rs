//! Application layer - orchestrates domain logic through ports.
//!
//! Handlers own the use-case flow and receive their dependencies as
//! `Arc<dyn Port>` at construction, so the HTTP layer stays thin and the
//! flows stay testable against in-memory fakes.

pub mod handlers;
