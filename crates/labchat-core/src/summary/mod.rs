//! Summary request/response cycle.
//!
//! `SummaryClient::request_summary` sends one user message to the backend and
//! presents the outcome in a [`ChatView`](crate::view::ChatView). Response
//! rendering is split out so the pieces stay testable without a backend.

pub mod client;
pub mod normalize;
pub mod reference;

use labchat_types::config::AssetPaths;
use labchat_types::summary::{BotReply, SummaryResponse};

use crate::markdown::markdown_to_html;

pub use client::SummaryClient;

/// Message shown in place of a reply when a summary request fails.
pub const SUMMARY_FAILURE_MESSAGE: &str = "Error: Unable to get response from bot.";

/// Turn a backend response into the bot reply shown to the user.
///
/// The reference block is only appended when the backend returned a
/// non-empty `retrieved_contexts` array.
pub fn render_reply(response: &SummaryResponse, assets: &AssetPaths) -> BotReply {
    let summary = normalize::normalize_summary(&response.summary);

    let mut html = format!(
        r#"<div class="bot-response"><img src="{}" class="bot-icon" alt="Bot Icon"><div class="bot-text">{}</div></div>"#,
        assets.bot_icon,
        markdown_to_html(&summary)
    );

    let contexts = response.retrieved_contexts.as_deref().unwrap_or_default();
    let references = reference::references_from_contexts(contexts);
    if !contexts.is_empty() {
        html.push_str(&reference::render_reference_list(&references));
    }

    BotReply {
        summary,
        html,
        references,
    }
}

#[cfg(test)]
mod tests {
    use labchat_types::summary::RetrievedContext;

    use super::*;

    fn response(summary: &str, contexts: Option<Vec<RetrievedContext>>) -> SummaryResponse {
        SummaryResponse {
            summary: summary.to_string(),
            retrieved_contexts: contexts,
        }
    }

    #[test]
    fn test_reply_without_references() {
        let reply = render_reply(&response("\"**Yes**\"", None), &AssetPaths::default());
        assert_eq!(reply.summary, "**Yes**");
        assert_eq!(
            reply.html,
            r#"<div class="bot-response"><img src="/static/images/favicon.ico" class="bot-icon" alt="Bot Icon"><div class="bot-text"><p><strong>Yes</strong></p></div></div>"#
        );
        assert!(reply.references.is_empty());
    }

    #[test]
    fn test_empty_contexts_add_no_reference_block() {
        let reply = render_reply(&response("ok", Some(Vec::new())), &AssetPaths::default());
        assert!(!reply.html.contains("bot-references"));
    }

    #[test]
    fn test_reply_with_references() {
        let contexts = vec![
            RetrievedContext {
                source: Some("https://x.com".to_string()),
                page_content: Some("Fact one. Fact two.".to_string()),
                ..Default::default()
            },
            RetrievedContext::default(),
        ];
        let reply = render_reply(&response("Answer\\n* point", Some(contexts)), &AssetPaths::default());
        assert_eq!(reply.summary, "Answer\n* point");
        assert!(reply.html.contains("<p>Answer</p><ul><li>point</li></ul>"));
        assert_eq!(reply.references.len(), 1);
        assert!(reply.html.ends_with(
            r#"<ol><li><a href="https://x.com" target="_blank">https://x.com</a><div class="source-snippet">Fact one.</div></li></ol></div>"#
        ));
    }

    #[test]
    fn test_contexts_without_sources_still_render_block() {
        let reply = render_reply(
            &response("ok", Some(vec![RetrievedContext::default()])),
            &AssetPaths::default(),
        );
        assert!(reply.references.is_empty());
        assert!(reply.html.contains("<strong>References:</strong><ol></ol>"));
    }
}
