//! Chat message types for labchat.
//!
//! A chat message is display-only: it has no identity, and its position in the
//! transcript is the order in which it was appended.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::summary::BotReply;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ChatRole::User),
            "bot" => Ok(ChatRole::Bot),
            other => Err(format!("invalid chat role: '{other}'")),
        }
    }
}

/// A message shown in the chat transcript.
///
/// `content` is plain text for user messages and an HTML fragment for bot
/// messages. Bot messages built from a successful summary also carry the
/// structured [`BotReply`] so non-HTML views can render it natively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<BotReply>,
}

impl ChatMessage {
    /// A user message holding literal text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: text.into(),
            reply: None,
        }
    }

    /// A bot message rendered from a summary reply.
    pub fn bot(reply: BotReply) -> Self {
        Self {
            role: ChatRole::Bot,
            content: reply.html.clone(),
            reply: Some(reply),
        }
    }

    /// A bot message with pre-rendered markup and no structured reply.
    pub fn bot_markup(html: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            content: html.into(),
            reply: None,
        }
    }
}

/// One entry of the conversation history sent to (or read from) the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub role: ChatRole,
}

impl HistoryEntry {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            role: ChatRole::User,
        }
    }
}
