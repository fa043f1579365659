use serde::{Deserialize, Serialize};

use super::email::Email;
use super::password::PasswordHash;

/// A user record as the directory stores it.
#[derive(Debug, Clone)]
pub struct User {
    email: Email,
    name: Option<String>,
    password_hash: PasswordHash,
}

impl User {
    pub fn new(email: Email, name: Option<String>, password_hash: PasswordHash) -> Self {
        Self {
            email,
            name,
            password_hash,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// The snapshot of a user that an open session carries. Deliberately
/// hash-free so session payloads can be serialized and logged without
/// touching credential material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    email: Email,
    name: Option<String>,
}

impl SessionUser {
    pub fn new(email: Email, name: Option<String>) -> Self {
        Self { email, name }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// What the protected page greets the user as: the display name when one
    /// was registered, the email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.email.as_str())
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
