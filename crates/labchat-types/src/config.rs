//! Client configuration types for labchat.
//!
//! `ClientConfig` represents the top-level `config.toml` that controls which
//! backend the client talks to, the credential it sends, and display settings.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Top-level configuration for the labchat client.
///
/// Loaded from `~/.labchat/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static credential sent in the `Authorization` header of summary requests.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Initial theme.
    #[serde(default)]
    pub theme: Theme,

    /// Record each user message in the backend history (`POST /ask`) before
    /// requesting a summary.
    #[serde(default)]
    pub record_history: bool,

    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub assets: AssetPaths,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_api_key() -> String {
    "full-stack-ai-lab".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            theme: Theme::default(),
            record_history: false,
            request_timeout_secs: None,
            assets: AssetPaths::default(),
        }
    }
}

/// Static asset locations referenced by rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPaths {
    #[serde(default = "default_bot_icon")]
    pub bot_icon: String,
    #[serde(default = "default_sun_icon")]
    pub sun_icon: String,
    #[serde(default = "default_moon_icon")]
    pub moon_icon: String,
}

fn default_bot_icon() -> String {
    "/static/images/favicon.ico".to_string()
}

fn default_sun_icon() -> String {
    "/static/images/sun.svg".to_string()
}

fn default_moon_icon() -> String {
    "/static/images/moon.svg".to_string()
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            bot_icon: default_bot_icon(),
            sun_icon: default_sun_icon(),
            moon_icon: default_moon_icon(),
        }
    }
}
