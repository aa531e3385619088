//! In-memory HTML transcript.
//!
//! `Transcript` is the reference [`ChatView`]: an ordered list of message
//! nodes with the class lists and inner markup a browser page would hold,
//! plus a scroll position that always tracks the bottom. It can be exported
//! as a standalone HTML document.

use labchat_types::chat::{ChatMessage, ChatRole};

use crate::theme::ThemeRender;
use crate::view::{ChatView, LoadingHandle};

const LOADING_MARKUP: &str = r#"<div class="thinking-indicator"><div class="ellipsis"><span></span><span></span><span></span></div></div>"#;

/// One rendered entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptNode {
    pub id: u64,
    pub classes: Vec<&'static str>,
    pub inner_html: String,
}

impl TranscriptNode {
    pub fn is_loading(&self) -> bool {
        self.classes.contains(&"loading")
    }

    /// Rendered height in lines.
    fn height(&self) -> usize {
        self.inner_html.lines().count().max(1)
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            self.classes.join(" "),
            self.inner_html
        )
    }
}

#[derive(Debug, Default)]
pub struct Transcript {
    nodes: Vec<TranscriptNode>,
    next_id: u64,
    scroll_top: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[TranscriptNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of message nodes, excluding loading indicators.
    pub fn message_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_loading()).count()
    }

    pub fn has_loading_indicator(&self) -> bool {
        self.nodes.iter().any(TranscriptNode::is_loading)
    }

    pub fn scroll_height(&self) -> usize {
        self.nodes.iter().map(TranscriptNode::height).sum()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.scroll_top = 0;
    }

    fn push(&mut self, classes: Vec<&'static str>, inner_html: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(TranscriptNode {
            id,
            classes,
            inner_html,
        });
        self.scroll_top = self.scroll_height();
        id
    }

    /// The chat history container and its nodes.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div id="chatHistory" class="chat-history">"#);
        for node in &self.nodes {
            html.push_str(&node.to_html());
        }
        html.push_str("</div>");
        html
    }

    /// A standalone page containing the transcript, styled for `theme`.
    pub fn to_html_document(&self, theme: &ThemeRender) -> String {
        let classes = theme.root_classes.join(" ");
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html>\n<head><meta charset=\"utf-8\"><title>Chat transcript</title></head>\n",
                "<body class=\"{classes}\">\n",
                "<div id=\"chatContainer\" class=\"{classes}\">\n",
                "<img id=\"modeIcon\" src=\"{icon}\" alt=\"Toggle theme\">\n",
                "{history}\n",
                "</div>\n</body>\n</html>\n"
            ),
            classes = classes,
            icon = theme.icon_src,
            history = self.to_html(),
        )
    }
}

impl ChatView for Transcript {
    fn append_message(&mut self, message: &ChatMessage) {
        match message.role {
            ChatRole::Bot => {
                self.push(vec!["message", "bot-message"], message.content.clone());
            }
            ChatRole::User => {
                self.push(vec!["message", "user-message"], escape_html(&message.content));
            }
        }
    }

    fn append_loading_indicator(&mut self) -> LoadingHandle {
        let id = self.push(
            vec!["message", "bot-message", "loading"],
            LOADING_MARKUP.to_string(),
        );
        LoadingHandle(id)
    }

    fn remove_loading_indicator(&mut self, handle: LoadingHandle) {
        if let Some(pos) = self.nodes.iter().position(|n| n.id == handle.0) {
            self.nodes.remove(pos);
            self.scroll_top = self.scroll_top.min(self.scroll_height());
        }
    }
}

/// Escape text for insertion as literal content.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
