use secrecy::Secret;
use thiserror::Error;

use super::email::Email;
use super::password::Password;

/// A login attempt's input: an email and the plaintext password to check
/// against the directory. Exists only for the duration of the attempt.
#[derive(Debug)]
pub struct Credentials {
    email: Email,
    password: Password,
}

/// Rejections here are VALIDATION failures (the form was not filled in),
/// distinct from an authentication rejection which deliberately reveals
/// nothing.
#[derive(Debug, Error, PartialEq)]
pub enum CredentialsError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
}

impl Credentials {
    pub fn parse(email: String, password: Secret<String>) -> Result<Self, CredentialsError> {
        let email = Email::try_from(email).map_err(|_| CredentialsError::MissingEmail)?;
        let password =
            Password::try_from(password).map_err(|_| CredentialsError::MissingPassword)?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
