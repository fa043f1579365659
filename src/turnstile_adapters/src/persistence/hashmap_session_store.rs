use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use turnstile_core::{SessionId, SessionStore, SessionStoreError, SessionUser};

#[derive(Debug, Clone)]
struct SessionRecord {
    user: SessionUser,
    issued_at: DateTime<Utc>,
}

/// In-memory session store for tests and local runs. Sessions live until
/// closed or the process exits, which is exactly the browser-lifetime
/// durability the flow promises.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// When the given session was opened, if it is live.
    pub async fn issued_at(&self, session: &SessionId) -> Option<DateTime<Utc>> {
        self.sessions
            .read()
            .await
            .get(session)
            .map(|record| record.issued_at)
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn open_session(&self, user: SessionUser) -> Result<SessionId, SessionStoreError> {
        let id = SessionId::random();
        let record = SessionRecord {
            user,
            issued_at: Utc::now(),
        };
        self.sessions.write().await.insert(id, record);
        Ok(id)
    }

    async fn current_user(
        &self,
        session: &SessionId,
    ) -> Result<Option<SessionUser>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session).map(|record| record.user.clone()))
    }

    async fn close_session(&self, session: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(session);
        Ok(())
    }
}
