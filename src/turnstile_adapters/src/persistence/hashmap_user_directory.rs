use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use turnstile_core::{Email, User, UserDirectory, UserDirectoryError};

/// In-memory user directory for tests and local runs.
#[derive(Default, Clone)]
pub struct HashMapUserDirectory {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for HashMapUserDirectory {
    async fn create_user(&self, user: User) -> Result<(), UserDirectoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserDirectoryError::AlreadyRegistered);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_user(&self, email: &Email) -> Result<User, UserDirectoryError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserDirectoryError::UnknownUser)
    }
}
