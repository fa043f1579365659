use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user's email address, the identity key of the directory.
///
/// Leading/trailing whitespace is trimmed on construction. Anything
/// non-empty is a valid `Email`; whether it is SHAPED like an address is a
/// registration rule, not an identity rule, so lookups with arbitrary input
/// stay possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,
}

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
