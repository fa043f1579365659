use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::email::Email;
use super::password::Password;

// Loose on purpose: one @ with non-blank sides. Real deliverability is the
// mail server's problem.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

/// A validated sign-up request: name, email, and a password whose
/// confirmation matched. The confirmation itself is consumed by `parse` and
/// never carried further.
#[derive(Debug)]
pub struct Registration {
    name: String,
    email: Email,
    password: Password,
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistrationError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Email is not a valid address")]
    MalformedEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Password confirmation does not match")]
    ConfirmationMismatch,
}

impl Registration {
    pub fn parse(
        name: String,
        email: String,
        password: Secret<String>,
        password_confirmation: Secret<String>,
    ) -> Result<Self, RegistrationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }

        let email = Email::try_from(email).map_err(|_| RegistrationError::MissingEmail)?;
        if !EMAIL_SHAPE.is_match(email.as_str()) {
            return Err(RegistrationError::MalformedEmail);
        }

        let password =
            Password::try_from(password).map_err(|_| RegistrationError::MissingPassword)?;
        if password.as_ref().expose_secret() != password_confirmation.expose_secret() {
            return Err(RegistrationError::ConfirmationMismatch);
        }

        Ok(Self {
            name: name.to_string(),
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn into_parts(self) -> (String, Email, Password) {
        (self.name, self.email, self.password)
    }
}
