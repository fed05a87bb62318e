//! Authentication value objects shared across layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// The identity resolved from a validated session token.
///
/// Injected into request extensions by the auth middleware; handlers read it
/// through the `RequireAuth` extractor. Carries only what route handlers
/// need to gate access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    /// Creates an authenticated user for the given id.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Errors from session token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Token is unknown or expired.
    #[error("Invalid or expired session token")]
    InvalidToken,

    /// The session store could not be reached.
    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}
