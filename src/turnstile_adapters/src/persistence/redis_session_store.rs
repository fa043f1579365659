use std::sync::Arc;

use redis::{Commands, Connection};
use tokio::sync::RwLock;

use turnstile_core::{SessionId, SessionStore, SessionStoreError, SessionUser};

/// Session store backed by Redis. Each session is one JSON value under a
/// prefixed key with a TTL, so abandoned sessions age out on their own.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Opening session in Redis", skip_all)]
    async fn open_session(&self, user: SessionUser) -> Result<SessionId, SessionStoreError> {
        let id = SessionId::random();
        let key = get_key(&id);
        let payload = serde_json::to_string(&user)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        let mut conn = self.conn.write().await;
        conn.set_ex::<_, _, ()>(key, payload, self.session_ttl)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        Ok(id)
    }

    #[tracing::instrument(name = "Resolving session in Redis", skip_all)]
    async fn current_user(
        &self,
        session: &SessionId,
    ) -> Result<Option<SessionUser>, SessionStoreError> {
        let key = get_key(session);

        let mut conn = self.conn.write().await;
        let payload: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        payload
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Closing session in Redis", skip_all)]
    async fn close_session(&self, session: &SessionId) -> Result<(), SessionStoreError> {
        let key = get_key(session);

        let mut conn = self.conn.write().await;
        conn.del::<_, ()>(&key)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))
    }
}

// We are using a key prefix to prevent collisions and organize data!
const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(session: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, session)
}
