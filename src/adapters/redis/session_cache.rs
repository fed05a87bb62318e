//! Redis-backed session cache for multi-server deployments.
//!
//! Two key shapes:
//! - `session:{token}` -> user id, with a TTL so stale mirrors expire on
//!   their own
//! - `user_sessions:{user_id}` -> set of the user's cached tokens, used to
//!   drop every mirror at once on logout

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::session::AuthSession;
use crate::ports::SessionCache;

fn session_key(token: &str) -> String {
    format!("session:{}", token)
}

fn user_sessions_key(user_id: &UserId) -> String {
    format!("user_sessions:{}", user_id)
}

/// Redis implementation of the SessionCache port.
#[derive(Clone)]
pub struct RedisSessionCache {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisSessionCache {
    /// Create a new Redis session cache with the given entry TTL.
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }
}

#[async_trait]
impl SessionCache for RedisSessionCache {
    async fn get(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let mut conn = self.conn.clone();

        let value: Option<String> = conn
            .get(session_key(token))
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::cache(format!("Failed to read session entry: {}", e))
            })?;

        match value {
            Some(raw) => {
                let uuid = Uuid::parse_str(&raw).map_err(|e| {
                    DomainError::cache(format!("Corrupt session cache entry: {}", e))
                })?;
                Ok(Some(UserId::from_uuid(uuid)))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, session: &AuthSession) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();

        conn.set_ex::<_, _, ()>(
            session_key(&session.token),
            session.user_id.to_string(),
            self.ttl_secs,
        )
        .await
        .map_err(|e: redis::RedisError| {
            DomainError::cache(format!("Failed to write session entry: {}", e))
        })?;

        // Track the token so invalidate_user can find it later. The set
        // outlives individual entries slightly; members pointing at expired
        // entries are harmless.
        let set_key = user_sessions_key(&session.user_id);
        conn.sadd::<_, _, ()>(&set_key, &session.token)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::cache(format!("Failed to track session token: {}", e))
            })?;
        conn.expire::<_, ()>(&set_key, self.ttl_secs as i64)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::cache(format!("Failed to expire token set: {}", e))
            })?;

        Ok(())
    }

    async fn invalidate_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut conn = self.conn.clone();
        let set_key = user_sessions_key(user_id);

        let tokens: Vec<String> =
            conn.smembers(&set_key)
                .await
                .map_err(|e: redis::RedisError| {
                    DomainError::cache(format!("Failed to list session tokens: {}", e))
                })?;

        let mut removed: u64 = 0;
        for token in &tokens {
            let deleted: i64 =
                conn.del(session_key(token))
                    .await
                    .map_err(|e: redis::RedisError| {
                        DomainError::cache(format!("Failed to delete session entry: {}", e))
                    })?;
            removed += deleted as u64;
        }

        conn.del::<_, ()>(&set_key)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::cache(format!("Failed to delete token set: {}", e))
            })?;

        Ok(removed)
    }
}

impl std::fmt::Debug for RedisSessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionCache")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
