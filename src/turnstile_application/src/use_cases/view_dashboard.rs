use turnstile_core::{SessionContext, SessionStore, SessionStoreError, SessionUser};

/// Outcome of asking for the protected page.
#[derive(Debug, PartialEq)]
pub enum DashboardAccess {
    /// The context resolved to a live session; show the page to this user.
    Granted(SessionUser),
    /// Anonymous, or the claimed session is gone. Send the caller to the
    /// sign-in form.
    SignedOut,
}

/// Error types specific to the view-dashboard use case
#[derive(Debug, thiserror::Error)]
pub enum ViewDashboardError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// View-dashboard use case - decides whether the caller may see the
/// protected resource. Read-only: it never touches session state.
pub struct ViewDashboardUseCase<S>
where
    S: SessionStore,
{
    sessions: S,
}

impl<S> ViewDashboardUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(name = "ViewDashboardUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        context: &SessionContext,
    ) -> Result<DashboardAccess, ViewDashboardError> {
        let Some(session_id) = context.session_id() else {
            return Ok(DashboardAccess::SignedOut);
        };

        match self.sessions.current_user(session_id).await? {
            Some(user) => Ok(DashboardAccess::Granted(user)),
            None => Ok(DashboardAccess::SignedOut),
        }
    }
}
