//! ValidateSessionHandler - resolves a bearer token to an identity.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{SessionCache, SessionStore};

/// Handler that validates session tokens for the auth middleware.
///
/// Checks the cache mirror first; on a miss it falls back to the session
/// store and mirrors the result back. Cache failures never fail the
/// validation - the store is authoritative, the cache is an optimization.
pub struct ValidateSessionHandler {
    store: Arc<dyn SessionStore>,
    cache: Arc<dyn SessionCache>,
}

impl ValidateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, cache: Arc<dyn SessionCache>) -> Self {
        Self { store, cache }
    }

    pub async fn handle(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        // 1. Cache fast path
        match self.cache.get(token).await {
            Ok(Some(user_id)) => return Ok(AuthenticatedUser::new(user_id)),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Session cache lookup failed, falling back to store");
            }
        }

        // 2. Store lookup (source of truth)
        let session = self
            .store
            .find_valid(token)
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        // 3. Mirror back, best-effort
        if let Err(e) = self.cache.put(&session).await {
            tracing::warn!(error = %e, "Failed to mirror session into cache");
        }

        Ok(AuthenticatedUser::new(session.user_id))
    }
}
