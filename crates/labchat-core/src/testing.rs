//! In-memory backend for unit tests.

use std::sync::{Arc, Mutex};

use labchat_types::chat::HistoryEntry;
use labchat_types::error::BackendError;
use labchat_types::session::SessionId;
use labchat_types::summary::{SaveRecordRequest, SummaryRequest, SummaryResponse};

use crate::backend::ChatBackend;

#[derive(Default)]
struct FakeState {
    session: Option<Result<SessionId, BackendError>>,
    summary: Option<Result<SummaryResponse, BackendError>>,
    record_error: Option<BackendError>,
    history: Vec<HistoryEntry>,
    session_calls: usize,
    summary_requests: Vec<SummaryRequest>,
    recorded: Vec<String>,
    saved: Vec<SaveRecordRequest>,
}

/// Ordered log of calls, shareable with a test view to check interleaving.
pub type EventLog = Arc<Mutex<Vec<&'static str>>>;

/// Scriptable [`ChatBackend`] that records every call it receives.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
    events: EventLog,
}

impl FakeBackend {
    pub fn with_session(id: &str) -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().session = Some(Ok(SessionId::from(id)));
        backend
    }

    pub fn fail_session(&self, err: BackendError) {
        self.state.lock().unwrap().session = Some(Err(err));
    }

    pub fn set_summary(&self, response: SummaryResponse) {
        self.state.lock().unwrap().summary = Some(Ok(response));
    }

    pub fn fail_summary(&self, err: BackendError) {
        self.state.lock().unwrap().summary = Some(Err(err));
    }

    pub fn fail_record(&self, err: BackendError) {
        self.state.lock().unwrap().record_error = Some(err);
    }

    pub fn set_history(&self, history: Vec<HistoryEntry>) {
        self.state.lock().unwrap().history = history;
    }

    pub fn session_calls(&self) -> usize {
        self.state.lock().unwrap().session_calls
    }

    pub fn summary_requests(&self) -> Vec<SummaryRequest> {
        self.state.lock().unwrap().summary_requests.clone()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.state.lock().unwrap().recorded.clone()
    }

    pub fn event_log(&self) -> EventLog {
        Arc::clone(&self.events)
    }

    pub fn saved(&self) -> Vec<SaveRecordRequest> {
        self.state.lock().unwrap().saved.clone()
    }
}

impl ChatBackend for FakeBackend {
    fn base_url(&self) -> &str {
        "http://backend.test"
    }

    async fn create_session(&self) -> Result<SessionId, BackendError> {
        let mut state = self.state.lock().unwrap();
        state.session_calls += 1;
        state
            .session
            .clone()
            .unwrap_or_else(|| Err(BackendError::Transport("no session scripted".to_string())))
    }

    async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, BackendError> {
        self.events.lock().unwrap().push("summary");
        let mut state = self.state.lock().unwrap();
        state.summary_requests.push(request.clone());
        state
            .summary
            .clone()
            .unwrap_or_else(|| Err(BackendError::Transport("no summary scripted".to_string())))
    }

    async fn session_history(
        &self,
        _session_id: &SessionId,
    ) -> Result<Vec<HistoryEntry>, BackendError> {
        Ok(self.state.lock().unwrap().history.clone())
    }

    async fn record_message(&self, _session_id: &SessionId, message: &str) -> Result<(), BackendError> {
        self.events.lock().unwrap().push("record");
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.record_error.clone() {
            return Err(err);
        }
        state.recorded.push(message.to_string());
        Ok(())
    }

    async fn save_record(&self, request: &SaveRecordRequest) -> Result<(), BackendError> {
        self.state.lock().unwrap().saved.push(request.clone());
        Ok(())
    }
}
