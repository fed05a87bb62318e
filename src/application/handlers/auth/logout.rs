//! LogoutHandler - command handler for bulk session invalidation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::session::InvalidatedCredentials;
use crate::ports::{SessionCache, SessionStore};

/// Command to destroy every credential a user holds.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub user_id: UserId,
}

/// Result of a logout.
#[derive(Debug, Clone, Copy)]
pub struct LogoutResult {
    /// Rows removed from the session store.
    pub invalidated: InvalidatedCredentials,

    /// Whether the cache invalidation step succeeded.
    pub cache_invalidated: bool,
}

/// Handler for logout.
///
/// Deletes sessions and refresh tokens from the store, then drops the
/// mirrored cache entries. The store is the source of truth: a cache
/// failure after a successful store deletion is logged and the operation
/// still reports success (stale cache entries expire via TTL). A store
/// failure propagates and nothing else runs.
pub struct LogoutHandler {
    store: Arc<dyn SessionStore>,
    cache: Arc<dyn SessionCache>,
}

impl LogoutHandler {
    pub fn new(store: Arc<dyn SessionStore>, cache: Arc<dyn SessionCache>) -> Self {
        Self { store, cache }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<LogoutResult, DomainError> {
        // 1. Delete from the store (authoritative)
        let invalidated = self.store.delete_by_user(&cmd.user_id).await?;

        // 2. Drop the cache mirror, best-effort
        let cache_invalidated = match self.cache.invalidate_user(&cmd.user_id).await {
            Ok(removed) => {
                tracing::debug!(
                    user_id = %cmd.user_id,
                    sessions = invalidated.sessions,
                    refresh_tokens = invalidated.refresh_tokens,
                    cache_entries = removed,
                    "User logged out"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    error = %e,
                    "Cache invalidation failed after store deletion; entries will expire via TTL"
                );
                false
            }
        };

        Ok(LogoutResult {
            invalidated,
            cache_invalidated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::AuthSession;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::Mutex;

    struct MockSessionStore {
        sessions: Mutex<Vec<AuthSession>>,
        refresh_tokens: Mutex<Vec<(UserId, String)>>,
        fail_delete: bool,
    }

    impl MockSessionStore {
        fn new() -> Self {
            Self {
                sessions: Mutex::new(Vec::new()),
                refresh_tokens: Mutex::new(Vec::new()),
                fail_delete: false,
            }
        }

        fn with_credentials(user_id: UserId, sessions: u32, refresh_tokens: u32) -> Self {
            let store = Self::new();
            for i in 0..sessions {
                store.sessions.lock().unwrap().push(AuthSession {
                    user_id,
                    token: format!("tok_{}", i),
                    expires_at: Utc::now() + Duration::hours(1),
                });
            }
            for i in 0..refresh_tokens {
                store
                    .refresh_tokens
                    .lock()
                    .unwrap()
                    .push((user_id, format!("rt_{}", i)));
            }
            store
        }

        fn failing_delete() -> Self {
            Self {
                fail_delete: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn find_valid(&self, token: &str) -> Result<Option<AuthSession>, DomainError> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.token == token)
                .cloned())
        }

        async fn delete_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<InvalidatedCredentials, DomainError> {
            if self.fail_delete {
                return Err(DomainError::database("Simulated delete failure"));
            }
            let mut sessions = self.sessions.lock().unwrap();
            let before_sessions = sessions.len();
            sessions.retain(|s| &s.user_id != user_id);

            let mut tokens = self.refresh_tokens.lock().unwrap();
            let before_tokens = tokens.len();
            tokens.retain(|(u, _)| u != user_id);

            Ok(InvalidatedCredentials {
                sessions: (before_sessions - sessions.len()) as u64,
                refresh_tokens: (before_tokens - tokens.len()) as u64,
            })
        }
    }

    struct MockSessionCache {
        entries: Mutex<Vec<(String, UserId)>>,
        fail_invalidate: bool,
    }

    impl MockSessionCache {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
                fail_invalidate: false,
            }
        }

        fn with_entries(user_id: UserId, count: u32) -> Self {
            let cache = Self::new();
            for i in 0..count {
                cache
                    .entries
                    .lock()
                    .unwrap()
                    .push((format!("tok_{}", i), user_id));
            }
            cache
        }

        fn failing() -> Self {
            Self {
                fail_invalidate: true,
                ..Self::new()
            }
        }

        fn entry_count(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SessionCache for MockSessionCache {
        async fn get(&self, token: &str) -> Result<Option<UserId>, DomainError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .find(|(t, _)| t == token)
                .map(|(_, u)| *u))
        }

        async fn put(&self, session: &AuthSession) -> Result<(), DomainError> {
            self.entries
                .lock()
                .unwrap()
                .push((session.token.clone(), session.user_id));
            Ok(())
        }

        async fn invalidate_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
            if self.fail_invalidate {
                return Err(DomainError::cache("Simulated invalidation failure"));
            }
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|(_, u)| u != user_id);
            Ok((before - entries.len()) as u64)
        }
    }

    #[tokio::test]
    async fn deletes_store_rows_and_cache_entries() {
        let user_id = UserId::new();
        let store = Arc::new(MockSessionStore::with_credentials(user_id, 2, 1));
        let cache = Arc::new(MockSessionCache::with_entries(user_id, 2));

        let handler = LogoutHandler::new(store, cache.clone());

        let result = handler.handle(LogoutCommand { user_id }).await.unwrap();
        assert_eq!(result.invalidated.sessions, 2);
        assert_eq!(result.invalidated.refresh_tokens, 1);
        assert!(result.cache_invalidated);
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let user_id = UserId::new();
        let store = Arc::new(MockSessionStore::with_credentials(user_id, 1, 1));
        let cache = Arc::new(MockSessionCache::new());

        let handler = LogoutHandler::new(store, cache);

        let first = handler.handle(LogoutCommand { user_id }).await.unwrap();
        assert_eq!(first.invalidated.total(), 2);

        // Second call succeeds and removes nothing.
        let second = handler.handle(LogoutCommand { user_id }).await.unwrap();
        assert_eq!(second.invalidated.total(), 0);
    }

    #[tokio::test]
    async fn cache_failure_still_reports_success() {
        let user_id = UserId::new();
        let store = Arc::new(MockSessionStore::with_credentials(user_id, 1, 0));
        let cache = Arc::new(MockSessionCache::failing());

        let handler = LogoutHandler::new(store, cache);

        let result = handler.handle(LogoutCommand { user_id }).await.unwrap();
        assert_eq!(result.invalidated.sessions, 1);
        assert!(!result.cache_invalidated);
    }

    #[tokio::test]
    async fn store_failure_propagates_and_skips_cache() {
        let user_id = UserId::new();
        let store = Arc::new(MockSessionStore::failing_delete());
        let cache = Arc::new(MockSessionCache::with_entries(user_id, 1));

        let handler = LogoutHandler::new(store, cache.clone());

        let result = handler.handle(LogoutCommand { user_id }).await;
        assert!(result.is_err());
        // Cache untouched: no session was destroyed.
        assert_eq!(cache.entry_count(), 1);
    }

    #[tokio::test]
    async fn does_not_touch_other_users() {
        let user_a = UserId::new();
        let user_b = UserId::new();
        let store = Arc::new(MockSessionStore::with_credentials(user_a, 1, 1));
        store.sessions.lock().unwrap().push(AuthSession {
            user_id: user_b,
            token: "tok_b".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        });
        let cache = Arc::new(MockSessionCache::new());

        let handler = LogoutHandler::new(store.clone(), cache);

        handler.handle(LogoutCommand { user_id: user_a }).await.unwrap();

        let remaining = store.sessions.lock().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user_id, user_b);
    }
}
