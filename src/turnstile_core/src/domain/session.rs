use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier of a server-side session. The client only ever sees
/// this id (in a cookie); everything the session knows stays in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

#[derive(Debug, Error, PartialEq)]
#[error("Not a session id")]
pub struct InvalidSessionId;

impl SessionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = InvalidSessionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| InvalidSessionId)
    }
}

/// The caller's session claim, made explicit.
///
/// Every operation takes the context it runs under instead of consulting
/// ambient framework state, and hands new session state back explicitly.
/// A context is only a CLAIM: resolving it against the
/// [`SessionStore`](crate::ports::repositories::SessionStore) decides
/// whether the caller is actually authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    current: Option<SessionId>,
}

impl SessionContext {
    /// A caller presenting no session at all.
    pub fn anonymous() -> Self {
        Self { current: None }
    }

    /// A caller presenting `id` as their session.
    pub fn resuming(id: SessionId) -> Self {
        Self { current: Some(id) }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.current.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.current.is_none()
    }
}
