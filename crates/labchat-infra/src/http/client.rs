//! HttpChatBackend -- concrete [`ChatBackend`] implementation over reqwest.
//!
//! Talks to the backend's JSON API. Only `/generate_summary` is authenticated;
//! it receives the static API key in the `Authorization` header. The key is
//! wrapped in [`secrecy::SecretString`] and is never logged or included in
//! `Debug` output.

use std::time::Duration;

use reqwest::Response;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use labchat_core::backend::ChatBackend;
use labchat_types::chat::HistoryEntry;
use labchat_types::config::ClientConfig;
use labchat_types::error::BackendError;
use labchat_types::session::{SessionId, SessionIdResponse};
use labchat_types::summary::{
    SaveRecordRequest, SessionHistoryResponse, SummaryRequest, SummaryResponse,
};

/// reqwest-backed chat backend.
///
/// Intentionally does not derive Debug.
pub struct HttpChatBackend {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl HttpChatBackend {
    /// Create a backend client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        api_key: SecretString,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, BackendError> {
        Self::new(
            config.base_url.clone(),
            SecretString::from(config.api_key.clone()),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            401 | 403 => BackendError::Unauthorized,
            code => BackendError::Status { status: code, body },
        })
    }

    /// Decode a success body. Parsed with serde_json directly so the error
    /// names the offending field.
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(format!("failed to read response body: {e}")))?;
        serde_json::from_slice(&body)
            .map_err(|e| BackendError::Deserialization(format!("failed to parse response: {e}")))
    }
}

impl ChatBackend for HttpChatBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn create_session(&self) -> Result<SessionId, BackendError> {
        let response = self.send(self.client.post(self.url("/get_session_id"))).await?;
        let body: SessionIdResponse = Self::parse(response).await?;
        Ok(body.session_id)
    }

    async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, BackendError> {
        debug!(session_id = %request.session_id, "POST /generate_summary");
        let response = self
            .send(
                self.client
                    .post(self.url("/generate_summary"))
                    .header("Authorization", self.api_key.expose_secret())
                    .header("Content-Type", "application/json")
                    .json(request),
            )
            .await?;
        Self::parse(response).await
    }

    async fn session_history(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<HistoryEntry>, BackendError> {
        let response = self
            .send(
                self.client
                    .post(self.url("/get_session_history"))
                    .query(&[("session_id", session_id.as_str())]),
            )
            .await?;
        let body: SessionHistoryResponse = Self::parse(response).await?;
        Ok(body.message_history)
    }

    async fn record_message(&self, session_id: &SessionId, message: &str) -> Result<(), BackendError> {
        self.send(
            self.client
                .post(self.url("/ask"))
                .query(&[("session_id", session_id.as_str())])
                .json(&serde_json::json!({ "message": message })),
        )
        .await?;
        Ok(())
    }

    async fn save_record(&self, request: &SaveRecordRequest) -> Result<(), BackendError> {
        self.send(self.client.post(self.url("/save_record")).json(request))
            .await?;
        Ok(())
    }
}
