//! ChatBackend trait definition.
//!
//! This is the port the widget uses to reach the summarization backend. Uses
//! native async fn in traits (RPITIT, Rust 2024 edition); the HTTP
//! implementation lives in labchat-infra.

use std::future::Future;

use labchat_types::chat::HistoryEntry;
use labchat_types::error::BackendError;
use labchat_types::session::SessionId;
use labchat_types::summary::{SaveRecordRequest, SummaryRequest, SummaryResponse};

pub trait ChatBackend: Send + Sync {
    /// Origin the backend is served from, used to build share locations.
    fn base_url(&self) -> &str;

    /// `POST /get_session_id` -- issue a new session identifier.
    fn create_session(&self) -> impl Future<Output = Result<SessionId, BackendError>> + Send;

    /// `POST /generate_summary` -- summarize the latest user message.
    fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> impl Future<Output = Result<SummaryResponse, BackendError>> + Send;

    /// `POST /get_session_history` -- messages recorded for a session.
    fn session_history(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, BackendError>> + Send;

    /// `POST /ask` -- record a user message in the session history.
    fn record_message(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// `POST /save_record` -- persist a session's summary.
    fn save_record(
        &self,
        request: &SaveRecordRequest,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}
