//! Session store port - durable record of active login sessions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::session::{AuthSession, InvalidatedCredentials};

/// Port for the durable session store.
///
/// The store is the source of truth for session validity; the cache layer
/// only mirrors it. Implementations provide per-row atomicity - no
/// cross-table transactions are assumed by callers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session by token, returning it only while unexpired.
    async fn find_valid(&self, token: &str) -> Result<Option<AuthSession>, DomainError>;

    /// Delete every session and refresh token owned by the user.
    ///
    /// Returns the number of rows removed; deleting for a user with no
    /// credentials succeeds with zero counts.
    async fn delete_by_user(&self, user_id: &UserId)
        -> Result<InvalidatedCredentials, DomainError>;
}
