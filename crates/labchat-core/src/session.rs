//! Session acquisition.
//!
//! One session is acquired per widget lifetime. The result is an explicit
//! [`Session`] value handed to every operation that needs it; there is no
//! process-wide session state.

use tracing::info;

use labchat_types::error::SessionError;
use labchat_types::session::Session;

use crate::backend::ChatBackend;

pub struct SessionManager;

impl SessionManager {
    /// Ask the backend for a new session identifier.
    ///
    /// Issues exactly one `POST /get_session_id`. An empty identifier is
    /// treated as a malformed response.
    pub async fn acquire<B: ChatBackend>(backend: &B) -> Result<Session, SessionError> {
        let id = backend.create_session().await?;
        if id.as_str().is_empty() {
            return Err(SessionError::EmptySessionId);
        }

        let session = Session::new(id, backend.base_url());
        info!(session_id = %session.id, share_url = %session.share_url, "Session acquired");
        Ok(session)
    }
}
