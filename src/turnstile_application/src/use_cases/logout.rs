use turnstile_core::{SessionContext, SessionStore, SessionStoreError};

/// Error types for the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Logout use case - closes whatever session the caller was resuming.
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    sessions: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }

    /// Execute the logout use case
    ///
    /// Logging out while anonymous is a no-op, not an error; the caller ends
    /// up anonymous either way.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, context: &SessionContext) -> Result<(), LogoutError> {
        if let Some(session) = context.session_id() {
            self.sessions.close_session(session).await?;
        }
        Ok(())
    }
}
