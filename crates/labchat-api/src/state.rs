//! Application state wiring config and the backend together.
//!
//! AppState resolves the data directory, loads `config.toml`, applies CLI
//! overrides, and pins the widget's generics to the HTTP backend.

use std::path::PathBuf;

use labchat_core::summary::SummaryClient;
use labchat_infra::config::{load_client_config, resolve_data_dir};
use labchat_infra::http::HttpChatBackend;
use labchat_types::config::ClientConfig;
use labchat_types::theme::Theme;

/// Command-line values that take precedence over `config.toml`.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub theme: Option<Theme>,
}

pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load configuration and apply overrides.
    pub async fn init(overrides: ConfigOverrides) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = apply_overrides(load_client_config(&data_dir).await, overrides);
        tracing::debug!(base_url = %config.base_url, data_dir = %data_dir.display(), "Configuration loaded");
        Ok(Self { config, data_dir })
    }

    pub fn backend(&self) -> anyhow::Result<HttpChatBackend> {
        Ok(HttpChatBackend::from_config(&self.config)?)
    }

    pub fn summary_client(&self) -> anyhow::Result<SummaryClient<HttpChatBackend>> {
        Ok(SummaryClient::new(self.backend()?, self.config.assets.clone()))
    }
}

fn apply_overrides(mut config: ClientConfig, overrides: ConfigOverrides) -> ClientConfig {
    if let Some(base_url) = overrides.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = overrides.api_key {
        config.api_key = api_key;
    }
    if let Some(theme) = overrides.theme {
        config.theme = theme;
    }
    config
}
