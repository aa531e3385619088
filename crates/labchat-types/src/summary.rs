//! Summary request/response payloads and the rendered reply.
//!
//! Wire types mirror the backend's JSON: `POST /generate_summary` takes a
//! [`SummaryRequest`] and answers with a [`SummaryResponse`]. Unknown response
//! fields (`session_id`, `question`, ...) are ignored.

use serde::{Deserialize, Serialize};

use crate::chat::HistoryEntry;
use crate::session::SessionId;

/// Body of `POST /generate_summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub session_id: SessionId,
    pub message_history: Vec<HistoryEntry>,
}

impl SummaryRequest {
    /// Request carrying only the latest user message.
    pub fn for_message(session_id: SessionId, message: impl Into<String>) -> Self {
        Self {
            session_id,
            message_history: vec![HistoryEntry::user(message)],
        }
    }
}

/// Response of `POST /generate_summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(default)]
    pub retrieved_contexts: Option<Vec<RetrievedContext>>,
}

/// A source passage the backend cited in support of a summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievedContext {
    #[serde(default)]
    pub metadata: Option<ContextMetadata>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub page_content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextMetadata {
    #[serde(default)]
    pub source: Option<String>,
}

/// A reference citation derived from one retrieved context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// URL or plain label.
    pub source: String,
    /// First sentence of the passage text, when the context had any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Reference {
    /// Whether the source is an absolute `http(s)` URL.
    pub fn is_link(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

/// A rendered bot reply to one summary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    /// Normalized summary text (Markdown subset).
    pub summary: String,
    /// Full bot-response markup, including the reference list.
    pub html: String,
    pub references: Vec<Reference>,
}

/// Body of `POST /save_record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecordRequest {
    pub session_id: SessionId,
    pub message_history: Vec<HistoryEntry>,
    pub contexts: Vec<RetrievedContext>,
    pub summary: String,
}

/// Response of `POST /get_session_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistoryResponse {
    #[serde(default)]
    pub message_history: Vec<HistoryEntry>,
}
