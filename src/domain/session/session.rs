//! Authenticated session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// A durable login session owned by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Owning user.
    pub user_id: UserId,

    /// Opaque session token presented as a bearer credential.
    pub token: String,

    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Check whether the session is still valid at the given instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Row counts from a bulk credential invalidation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidatedCredentials {
    /// Session rows removed from the store.
    pub sessions: u64,

    /// Refresh token rows removed from the store.
    pub refresh_tokens: u64,
}

impl InvalidatedCredentials {
    /// Total credentials removed.
    pub fn total(&self) -> u64 {
        self.sessions + self.refresh_tokens
    }
}
