use thiserror::Error;

/// Errors from talking to the chat backend.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("authentication rejected")]
    Unauthorized,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from acquiring a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session acquisition failed: {0}")]
    Backend(#[from] BackendError),

    #[error("backend returned an empty session id")]
    EmptySessionId,
}

/// Errors from one summary request/response cycle.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("no session id available")]
    NoSession,

    #[error("summary request failed: {0}")]
    Backend(#[from] BackendError),
}

/// Errors from widget operations beyond the send flow.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no session id available")]
    NoSession,

    #[error("no reply to save yet")]
    NothingToSave,

    #[error(transparent)]
    Backend(#[from] BackendError),
}
