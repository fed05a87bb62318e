//! Session cache port - fast mirror of session validity.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::session::AuthSession;

/// Port for the low-latency session mirror.
///
/// Consistency with the session store is best-effort: entries are written
/// after a store lookup succeeds and invalidated in lockstep with logout,
/// but a failed invalidation is tolerated because entries carry a TTL and
/// the store remains authoritative.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Resolve a token to its owning user, if mirrored.
    async fn get(&self, token: &str) -> Result<Option<UserId>, DomainError>;

    /// Mirror a validated session.
    async fn put(&self, session: &AuthSession) -> Result<(), DomainError>;

    /// Drop every mirrored entry for the user.
    ///
    /// Returns the number of entries removed.
    async fn invalidate_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
