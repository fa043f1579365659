use turnstile_core::{
    PasswordScheme, PasswordSchemeError, Registration, SessionContext, SessionId, SessionStore,
    SessionStoreError, SessionUser, User, UserDirectory, UserDirectoryError,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The email is taken. Surfaced as its own variant because the HTTP
    /// layer treats it like a validation failure, not a server fault.
    #[error("Email is already registered")]
    AlreadyRegistered,
    #[error("User directory error: {0}")]
    UserDirectoryError(UserDirectoryError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("Password scheme error: {0}")]
    PasswordSchemeError(#[from] PasswordSchemeError),
}

impl From<UserDirectoryError> for RegisterError {
    fn from(error: UserDirectoryError) -> Self {
        match error {
            UserDirectoryError::AlreadyRegistered => Self::AlreadyRegistered,
            other => Self::UserDirectoryError(other),
        }
    }
}

/// Register use case - hashes the password, creates the user, and signs the
/// new user in.
pub struct RegisterUseCase<D, S, P>
where
    D: UserDirectory,
    S: SessionStore,
    P: PasswordScheme,
{
    directory: D,
    sessions: S,
    scheme: P,
}

impl<D, S, P> RegisterUseCase<D, S, P>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `context` - The caller's current session claim
    /// * `registration` - A validated sign-up request
    ///
    /// # Returns
    /// The id of the session opened for the new user
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        context: &SessionContext,
        registration: Registration,
    ) -> Result<SessionId, RegisterError> {
        let (name, email, password) = registration.into_parts();

        let password_hash = self.scheme.hash_password(&password).await?;
        let user = User::new(email, Some(name), password_hash);
        let session_user = SessionUser::from(&user);

        self.directory.create_user(user).await?;

        // The new account takes over this client context's single session
        // slot, whoever held it before.
        if let Some(previous) = context.session_id() {
            self.sessions.close_session(previous).await?;
        }
        let session = self.sessions.open_session(session_user).await?;

        Ok(session)
    }
}
