use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHash as ParsedHash, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use turnstile_core::{Password, PasswordHash, PasswordScheme, PasswordSchemeError};

/// Argon2id password scheme (m=15000, t=2, p=1). Hashing and verification
/// run on the blocking pool; the surrounding span is re-entered inside the
/// worker so the work stays attributed to its request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordScheme;

impl Argon2PasswordScheme {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PasswordScheme for Argon2PasswordScheme {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<PasswordHash, PasswordSchemeError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| PasswordSchemeError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordSchemeError::UnexpectedError(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify_password(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, PasswordSchemeError> {
        let candidate = candidate.clone();
        let stored = stored.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = ParsedHash::new(stored.expose_secret())
                    .map_err(|e| PasswordSchemeError::MalformedHash(e.to_string()))?;

                match hasher()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                {
                    Ok(()) => Ok(true),
                    // A mismatch is an answer, not a fault.
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordSchemeError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordSchemeError::UnexpectedError(e.to_string()))?;

        result
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordSchemeError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordSchemeError::UnexpectedError(e.to_string()))?,
    ))
}
