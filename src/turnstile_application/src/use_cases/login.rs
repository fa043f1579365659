use turnstile_core::{
    Credentials, PasswordScheme, PasswordSchemeError, SessionContext, SessionId, SessionStore,
    SessionStoreError, SessionUser, UserDirectory, UserDirectoryError,
};

/// Response from the login use case
#[derive(Debug, PartialEq)]
pub enum LoginResponse {
    /// Credentials checked out; a fresh session is open.
    Authenticated { session: SessionId },
    /// Wrong password or unknown email. The two are deliberately
    /// indistinguishable, and the caller's session state is untouched.
    Rejected,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User directory error: {0}")]
    UserDirectoryError(#[from] UserDirectoryError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("Password scheme error: {0}")]
    PasswordSchemeError(#[from] PasswordSchemeError),
}

/// Login use case - checks credentials against the directory and opens a
/// session on success.
pub struct LoginUseCase<D, S, P>
where
    D: UserDirectory,
    S: SessionStore,
    P: PasswordScheme,
{
    directory: D,
    sessions: S,
    scheme: P,
}

impl<D, S, P> LoginUseCase<D, S, P>
where
    D: UserDirectory,
    S: SessionStore,
    P: PasswordScheme,
{
    pub fn new(directory: D, sessions: S, scheme: P) -> Self {
        Self {
            directory,
            sessions,
            scheme,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `context` - The caller's current session claim
    /// * `credentials` - Email and plaintext password of the attempt
    ///
    /// # Returns
    /// `Authenticated` with the new session id, or `Rejected`
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        context: &SessionContext,
        credentials: Credentials,
    ) -> Result<LoginResponse, LoginError> {
        let user = match self.directory.find_user(credentials.email()).await {
            Ok(user) => user,
            // An unknown email must look exactly like a wrong password.
            Err(UserDirectoryError::UnknownUser) => return Ok(LoginResponse::Rejected),
            Err(error) => return Err(error.into()),
        };

        let verified = self
            .scheme
            .verify_password(credentials.password(), user.password_hash())
            .await?;
        if !verified {
            return Ok(LoginResponse::Rejected);
        }

        // At most one session per client context: a caller that was already
        // signed in gets their old session replaced, not stacked.
        if let Some(previous) = context.session_id() {
            self.sessions.close_session(previous).await?;
        }
        let session = self.sessions.open_session(SessionUser::from(&user)).await?;

        Ok(LoginResponse::Authenticated { session })
    }
}
