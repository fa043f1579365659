use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordSchemeError {
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for password hashing and verification.
///
/// The flow logic never sees digest internals: it hands plaintext in and
/// gets an opaque [`PasswordHash`] or a yes/no back. A failed verification
/// is `Ok(false)`, not an error.
#[async_trait]
pub trait PasswordScheme: Send + Sync {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordSchemeError>;
    async fn verify_password(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, PasswordSchemeError>;
}
