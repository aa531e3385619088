use tracing::{debug, error};

use labchat_types::chat::ChatMessage;
use labchat_types::config::AssetPaths;
use labchat_types::error::SummaryError;
use labchat_types::session::Session;
use labchat_types::summary::{BotReply, SummaryRequest};

use crate::backend::ChatBackend;
use crate::view::ChatView;

use super::{SUMMARY_FAILURE_MESSAGE, render_reply};

/// Runs one summary request/response cycle against a [`ChatBackend`].
pub struct SummaryClient<B: ChatBackend> {
    backend: B,
    assets: AssetPaths,
}

impl<B: ChatBackend> SummaryClient<B> {
    pub fn new(backend: B, assets: AssetPaths) -> Self {
        Self { backend, assets }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    /// Request a summary for `user_message` and present it in `view`.
    ///
    /// Without a session this logs and returns [`SummaryError::NoSession`]
    /// before touching the network or the view. Otherwise the loading
    /// indicator is shown for the duration of the request and removed before
    /// either the reply or the generic failure message is appended. Every
    /// kind of backend failure takes the same path.
    pub async fn request_summary<V: ChatView>(
        &self,
        session: Option<&Session>,
        user_message: &str,
        view: &mut V,
    ) -> Result<BotReply, SummaryError> {
        let Some(session) = session else {
            error!("No session id available, summary request skipped");
            return Err(SummaryError::NoSession);
        };

        let loading = view.append_loading_indicator();

        let request = SummaryRequest::for_message(session.id.clone(), user_message);
        debug!(session_id = %session.id, "Requesting summary");

        match self.backend.generate_summary(&request).await {
            Ok(response) => {
                debug!(
                    contexts = response.retrieved_contexts.as_ref().map_or(0, Vec::len),
                    "Summary received"
                );
                let reply = render_reply(&response, &self.assets);
                view.remove_loading_indicator(loading);
                view.append_message(&ChatMessage::bot(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                error!(error = %e, "Error generating summary");
                view.remove_loading_indicator(loading);
                view.append_message(&ChatMessage::bot_markup(SUMMARY_FAILURE_MESSAGE));
                Err(SummaryError::Backend(e))
            }
        }
    }
}
