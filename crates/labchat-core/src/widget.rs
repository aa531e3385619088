//! Chat widget bootstrap and event wiring.
//!
//! `ChatWidget` owns everything a page instance owns: the session context,
//! the input buffer, the theme, and the view. Front ends feed it
//! [`WidgetEvent`]s; it decides what reaches the backend.

use tracing::{error, info, warn};

use labchat_types::chat::{ChatMessage, HistoryEntry};
use labchat_types::error::{SummaryError, WidgetError};
use labchat_types::session::Session;
use labchat_types::summary::{BotReply, RetrievedContext, SaveRecordRequest};
use labchat_types::theme::Theme;

use crate::backend::ChatBackend;
use crate::session::SessionManager;
use crate::summary::SummaryClient;
use crate::theme::{ThemeRender, ThemeState};
use crate::view::ChatView;

/// Input events a front end forwards to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The input field now holds this text.
    Input(String),
    /// The send button was clicked.
    SendClicked,
    /// A key was released in the input field (e.g. `"Enter"`).
    KeyUp(String),
    /// The theme toggle was clicked.
    ToggleMode,
}

/// What handling an event led to.
#[derive(Debug)]
pub enum SendOutcome {
    /// Nothing was sent (blank input, non-Enter key, or a non-send event).
    Ignored,
    /// The theme changed.
    ThemeChanged(ThemeRender),
    /// A message was sent and the summary request completed.
    Replied(BotReply),
    /// A message was sent and the summary request failed.
    Failed(SummaryError),
}

pub struct ChatWidget<B: ChatBackend, V: ChatView> {
    client: SummaryClient<B>,
    view: V,
    session: Option<Session>,
    theme: ThemeState,
    input: String,
    record_history: bool,
    last_reply: Option<(String, BotReply)>,
}

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    pub fn new(client: SummaryClient<B>, view: V, theme: Theme) -> Self {
        let theme = ThemeState::new(theme, client.assets().clone());
        Self {
            client,
            view,
            session: None,
            theme,
            input: String::new(),
            record_history: false,
            last_reply: None,
        }
    }

    /// Record each sent message in the backend history before summarizing.
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Page-load bootstrap: acquire the session and render the initial theme.
    ///
    /// Session failure is logged and leaves the widget without a session; sends
    /// then abort before reaching the network.
    pub async fn on_load(&mut self) -> ThemeRender {
        match SessionManager::acquire(self.client.backend()).await {
            Ok(session) => self.session = Some(session),
            Err(e) => error!(error = %e, "Error getting session id"),
        }
        self.theme.render()
    }

    /// Use an already acquired session (e.g. one shared between widgets).
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Shareable location embedding the session id, once one is acquired.
    pub fn location(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.share_url.as_str())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn theme(&self) -> ThemeRender {
        self.theme.render()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn client(&self) -> &SummaryClient<B> {
        &self.client
    }

    /// The last successfully answered message and its reply.
    pub fn last_reply(&self) -> Option<&(String, BotReply)> {
        self.last_reply.as_ref()
    }

    /// Messages the backend has recorded for this session.
    pub async fn session_history(&self) -> Result<Vec<HistoryEntry>, WidgetError> {
        let session = self.session.as_ref().ok_or(WidgetError::NoSession)?;
        Ok(self.client.backend().session_history(&session.id).await?)
    }

    /// Persist the last answered message and its summary on the backend.
    pub async fn save_last_reply(&self) -> Result<(), WidgetError> {
        let session = self.session.as_ref().ok_or(WidgetError::NoSession)?;
        let (message, reply) = self.last_reply.as_ref().ok_or(WidgetError::NothingToSave)?;

        let contexts = reply
            .references
            .iter()
            .map(|r| RetrievedContext {
                metadata: None,
                source: Some(r.source.clone()),
                page_content: r.snippet.clone(),
            })
            .collect();
        let request = SaveRecordRequest {
            session_id: session.id.clone(),
            message_history: vec![HistoryEntry::user(message.as_str())],
            contexts,
            summary: reply.summary.clone(),
        };

        self.client.backend().save_record(&request).await?;
        info!(session_id = %session.id, "Session record saved");
        Ok(())
    }

    pub async fn handle(&mut self, event: WidgetEvent) -> SendOutcome {
        match event {
            WidgetEvent::Input(text) => {
                self.input = text;
                SendOutcome::Ignored
            }
            WidgetEvent::SendClicked => self.send().await,
            WidgetEvent::KeyUp(key) if key == "Enter" => self.send().await,
            WidgetEvent::KeyUp(_) => SendOutcome::Ignored,
            WidgetEvent::ToggleMode => {
                self.theme.toggle();
                SendOutcome::ThemeChanged(self.theme.render())
            }
        }
    }

    /// Send whatever is in the input buffer.
    ///
    /// Blank or whitespace-only input is ignored without touching the view
    /// or the network.
    async fn send(&mut self) -> SendOutcome {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return SendOutcome::Ignored;
        }

        self.view.append_message(&ChatMessage::user(message.as_str()));
        self.input.clear();

        let result = self
            .client
            .request_summary(self.session.as_ref(), &message, &mut self.view)
            .await;

        // Recorded after the summary so the loading indicator shows first
        if self.record_history {
            self.record(&message).await;
        }

        match result {
            Ok(reply) => {
                self.last_reply = Some((message, reply.clone()));
                SendOutcome::Replied(reply)
            }
            Err(e) => SendOutcome::Failed(e),
        }
    }

    async fn record(&self, message: &str) {
        let Some(session) = &self.session else {
            return;
        };
        if let Err(e) = self.client.backend().record_message(&session.id, message).await {
            warn!(error = %e, "Failed to record message in session history");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use labchat_types::config::AssetPaths;
    use labchat_types::error::BackendError;
    use labchat_types::summary::SummaryResponse;

    use super::*;
    use crate::summary::SUMMARY_FAILURE_MESSAGE;
    use crate::testing::{EventLog, FakeBackend};
    use crate::theme::DARK_MODE_CLASS;
    use crate::transcript::Transcript;
    use crate::view::LoadingHandle;

    fn widget(backend: FakeBackend) -> ChatWidget<FakeBackend, Transcript> {
        let client = SummaryClient::new(backend, AssetPaths::default());
        ChatWidget::new(client, Transcript::new(), Theme::Light)
    }

    fn ok_summary(backend: &FakeBackend) {
        backend.set_summary(SummaryResponse {
            summary: "Sure.".to_string(),
            retrieved_contexts: None,
        });
    }

    #[tokio::test]
    async fn test_on_load_acquires_session_and_location() {
        let mut w = widget(FakeBackend::with_session("abc"));
        let render = w.on_load().await;
        assert_eq!(render.theme, Theme::Light);
        assert_eq!(w.session().unwrap().id.as_str(), "abc");
        assert_eq!(w.location(), Some("http://backend.test/session_id?sessionId=abc"));
    }

    #[tokio::test]
    async fn test_on_load_failure_leaves_session_unset() {
        let backend = FakeBackend::default();
        backend.fail_session(BackendError::Deserialization("bad json".to_string()));
        let mut w = widget(backend);
        w.on_load().await;
        assert!(w.session().is_none());
        assert!(w.location().is_none());
        assert!(w.view().is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_sends_nothing() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        let mut w = widget(backend);
        w.on_load().await;

        w.handle(WidgetEvent::Input("   \t ".to_string())).await;
        let outcome = w.handle(WidgetEvent::SendClicked).await;

        assert!(matches!(outcome, SendOutcome::Ignored));
        assert!(w.view().is_empty());
        assert!(w.client().backend().summary_requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_appends_user_message_and_reply() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        let mut w = widget(backend);
        w.on_load().await;

        w.handle(WidgetEvent::Input("  hello  ".to_string())).await;
        let outcome = w.handle(WidgetEvent::SendClicked).await;

        assert!(matches!(outcome, SendOutcome::Replied(_)));
        assert_eq!(w.input(), "");
        assert_eq!(w.view().len(), 2);
        assert_eq!(w.view().nodes()[0].inner_html, "hello");
        assert!(w.view().nodes()[1].classes.contains(&"bot-message"));
        assert_eq!(w.client().backend().summary_requests()[0].message_history[0].message, "hello");
        assert_eq!(w.last_reply().unwrap().0, "hello");
    }

    #[tokio::test]
    async fn test_enter_key_sends_and_other_keys_do_not() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        let mut w = widget(backend);
        w.on_load().await;

        w.handle(WidgetEvent::Input("hi".to_string())).await;
        let outcome = w.handle(WidgetEvent::KeyUp("a".to_string())).await;
        assert!(matches!(outcome, SendOutcome::Ignored));
        assert!(w.view().is_empty());

        let outcome = w.handle(WidgetEvent::KeyUp("Enter".to_string())).await;
        assert!(matches!(outcome, SendOutcome::Replied(_)));
        assert_eq!(w.client().backend().summary_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_send_without_session_shows_user_message_only() {
        let backend = FakeBackend::default();
        backend.fail_session(BackendError::Transport("down".to_string()));
        let mut w = widget(backend);
        w.on_load().await;

        w.handle(WidgetEvent::Input("hello".to_string())).await;
        let outcome = w.handle(WidgetEvent::SendClicked).await;

        assert!(matches!(outcome, SendOutcome::Failed(SummaryError::NoSession)));
        assert_eq!(w.view().len(), 1);
        assert!(w.client().backend().summary_requests().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_shows_one_error() {
        let backend = FakeBackend::with_session("abc");
        backend.fail_summary(BackendError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        let mut w = widget(backend);
        w.on_load().await;

        w.handle(WidgetEvent::Input("hello".to_string())).await;
        w.handle(WidgetEvent::SendClicked).await;

        let view = w.view();
        assert!(!view.has_loading_indicator());
        let errors = view
            .nodes()
            .iter()
            .filter(|n| n.inner_html == SUMMARY_FAILURE_MESSAGE)
            .count();
        assert_eq!(errors, 1);
        assert!(w.last_reply().is_none());
    }

    /// Transcript that logs indicator insertion into the backend's event log.
    struct LoggingView {
        inner: Transcript,
        events: EventLog,
    }

    impl ChatView for LoggingView {
        fn append_message(&mut self, message: &ChatMessage) {
            self.inner.append_message(message);
        }

        fn append_loading_indicator(&mut self) -> LoadingHandle {
            self.events.lock().unwrap().push("loading");
            self.inner.append_loading_indicator()
        }

        fn remove_loading_indicator(&mut self, handle: LoadingHandle) {
            self.inner.remove_loading_indicator(handle);
        }
    }

    #[tokio::test]
    async fn test_loading_indicator_shows_before_recording() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        let events = backend.event_log();
        let view = LoggingView {
            inner: Transcript::new(),
            events: Arc::clone(&events),
        };
        let client = SummaryClient::new(backend, AssetPaths::default());
        let mut w = ChatWidget::new(client, view, Theme::Light).with_record_history(true);
        w.on_load().await;

        w.handle(WidgetEvent::Input("remember me".to_string())).await;
        w.handle(WidgetEvent::SendClicked).await;

        assert_eq!(*events.lock().unwrap(), vec!["loading", "summary", "record"]);
    }

    #[tokio::test]
    async fn test_record_history_survives_summary_failure() {
        let backend = FakeBackend::with_session("abc");
        backend.fail_summary(BackendError::Transport("down".to_string()));
        let mut w = widget(backend).with_record_history(true);
        w.on_load().await;

        w.handle(WidgetEvent::Input("still recorded".to_string())).await;
        let outcome = w.handle(WidgetEvent::SendClicked).await;

        assert!(matches!(outcome, SendOutcome::Failed(_)));
        assert_eq!(w.client().backend().recorded(), vec!["still recorded".to_string()]);
    }

    #[tokio::test]
    async fn test_record_history_posts_sent_message() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        let mut w = widget(backend).with_record_history(true);
        w.on_load().await;

        w.handle(WidgetEvent::Input("remember me".to_string())).await;
        w.handle(WidgetEvent::SendClicked).await;

        assert_eq!(w.client().backend().recorded(), vec!["remember me".to_string()]);
    }

    #[tokio::test]
    async fn test_record_failure_does_not_block_summary() {
        let backend = FakeBackend::with_session("abc");
        ok_summary(&backend);
        backend.fail_record(BackendError::Status {
            status: 404,
            body: "Session not found".to_string(),
        });
        let mut w = widget(backend).with_record_history(true);
        w.on_load().await;

        w.handle(WidgetEvent::Input("hello".to_string())).await;
        let outcome = w.handle(WidgetEvent::SendClicked).await;

        assert!(matches!(outcome, SendOutcome::Replied(_)));
    }

    #[tokio::test]
    async fn test_session_history_requires_session() {
        let w = widget(FakeBackend::default());
        assert!(matches!(w.session_history().await, Err(WidgetError::NoSession)));
    }

    #[tokio::test]
    async fn test_session_history_returns_backend_entries() {
        let backend = FakeBackend::with_session("abc");
        backend.set_history(vec![HistoryEntry::user("first"), HistoryEntry::user("second")]);
        let mut w = widget(backend);
        w.on_load().await;

        let history = w.session_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].message, "second");
    }

    #[tokio::test]
    async fn test_save_before_any_reply() {
        let mut w = widget(FakeBackend::with_session("abc"));
        w.on_load().await;
        assert!(matches!(w.save_last_reply().await, Err(WidgetError::NothingToSave)));
    }

    #[tokio::test]
    async fn test_save_last_reply() {
        let backend = FakeBackend::with_session("abc");
        backend.set_summary(SummaryResponse {
            summary: "Use LEDs.".to_string(),
            retrieved_contexts: Some(vec![RetrievedContext {
                source: Some("guide.pdf".to_string()),
                page_content: Some("LEDs save energy. Really.".to_string()),
                ..Default::default()
            }]),
        });
        let mut w = widget(backend);
        w.on_load().await;
        w.handle(WidgetEvent::Input("lighting?".to_string())).await;
        w.handle(WidgetEvent::SendClicked).await;

        w.save_last_reply().await.unwrap();

        let saved = w.client().backend().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].session_id.as_str(), "abc");
        assert_eq!(saved[0].summary, "Use LEDs.");
        assert_eq!(saved[0].message_history[0].message, "lighting?");
        assert_eq!(saved[0].contexts[0].page_content.as_deref(), Some("LEDs save energy."));
    }

    #[tokio::test]
    async fn test_toggle_mode() {
        let mut w = widget(FakeBackend::with_session("abc"));
        let outcome = w.handle(WidgetEvent::ToggleMode).await;
        let SendOutcome::ThemeChanged(render) = outcome else {
            panic!("expected theme change");
        };
        assert_eq!(render.theme, Theme::Dark);
        assert_eq!(render.root_classes, vec![DARK_MODE_CLASS]);
        assert_eq!(w.theme().theme, Theme::Dark);
    }
}
