//! Session identifier types.
//!
//! The backend issues one opaque session identifier per widget lifetime. It is
//! never mutated and is passed explicitly to every operation that needs it.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque session token issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Response body of `POST /get_session_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionIdResponse {
    pub session_id: SessionId,
}

/// An acquired session: the identifier plus the shareable location that
/// embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub share_url: String,
}

impl Session {
    /// Build a session for `id`, deriving the share location from `base_url`.
    pub fn new(id: SessionId, base_url: &str) -> Self {
        let share_url = share_url(base_url, &id);
        Self { id, share_url }
    }
}

/// Shareable location for a session: `{base_url}/session_id?sessionId={id}`.
pub fn share_url(base_url: &str, id: &SessionId) -> String {
    format!("{}/session_id?sessionId={}", base_url.trim_end_matches('/'), id)
}
