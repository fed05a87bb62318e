//! Foundation types shared across the domain.
//!
//! Identifiers, authentication context, and the central error type that
//! crosses port boundaries.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{JobId, SubscriptionId, UserId};
