use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    session::SessionId,
    user::{SessionUser, User},
};

// UserDirectory port trait and errors
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("Email is already registered")]
    AlreadyRegistered,
    #[error("No user with that email")]
    UnknownUser,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserDirectoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyRegistered, Self::AlreadyRegistered) => true,
            (Self::UnknownUser, Self::UnknownUser) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, user: User) -> Result<(), UserDirectoryError>;
    async fn find_user(&self, email: &Email) -> Result<User, UserDirectoryError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens a fresh session for `user` and returns its id.
    async fn open_session(&self, user: SessionUser) -> Result<SessionId, SessionStoreError>;
    /// Resolves a session id to the user it was opened for. `Ok(None)` means
    /// the id is unknown (stale, garbage, or already closed), which callers
    /// treat as anonymous.
    async fn current_user(
        &self,
        session: &SessionId,
    ) -> Result<Option<SessionUser>, SessionStoreError>;
    /// Closes a session. Closing an unknown id is a no-op.
    async fn close_session(&self, session: &SessionId) -> Result<(), SessionStoreError>;
}
