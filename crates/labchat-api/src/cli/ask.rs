//! `labchat ask` -- one summary request without the interactive loop.

use anyhow::{Result, bail};
use console::style;

use labchat_core::widget::{ChatWidget, SendOutcome, WidgetEvent};
use labchat_types::summary::BotReply;

use crate::state::AppState;

use super::chat::view::TerminalView;

/// Acquire a session, send `message`, and print the reply.
///
/// Rendered text by default; `--html` prints the bot markup and `--json` the
/// structured reply.
pub async fn ask(state: &AppState, message: &str, html: bool, json: bool) -> Result<()> {
    let client = state.summary_client()?;
    let view = TerminalView::new(state.config.theme, !(html || json));
    let mut widget = ChatWidget::new(client, view, state.config.theme)
        .with_record_history(state.config.record_history);

    widget.on_load().await;
    if widget.session().is_none() {
        bail!(
            "Could not get a session id from {}. Is the backend running?",
            state.config.base_url
        );
    }

    widget.handle(WidgetEvent::Input(message.to_string())).await;
    let outcome = widget.handle(WidgetEvent::SendClicked).await;
    let failed = matches!(outcome, SendOutcome::Failed(_));
    let reply = match reply_from(outcome) {
        Ok(reply) => reply,
        Err(e) => {
            if failed && !json && !html {
                eprintln!("  {}", style("Run with -v for details.").dim());
            }
            return Err(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else if html {
        println!("{}", reply.html);
    }
    Ok(())
}

/// The reply of a send, or why there is none.
fn reply_from(outcome: SendOutcome) -> Result<BotReply> {
    match outcome {
        SendOutcome::Replied(reply) => Ok(reply),
        SendOutcome::Failed(e) => Err(e.into()),
        SendOutcome::Ignored | SendOutcome::ThemeChanged(_) => {
            bail!("Nothing to send: the message is blank.")
        }
    }
}

#[cfg(test)]
mod tests {
    use labchat_core::theme::ThemeState;
    use labchat_types::config::AssetPaths;
    use labchat_types::error::SummaryError;
    use labchat_types::theme::Theme;

    use super::*;

    #[test]
    fn test_reply_from_replied() {
        let reply = BotReply {
            summary: "ok".to_string(),
            html: "<p>ok</p>".to_string(),
            references: Vec::new(),
        };
        assert_eq!(reply_from(SendOutcome::Replied(reply)).unwrap().summary, "ok");
    }

    #[test]
    fn test_reply_from_non_send_outcomes_are_errors() {
        assert!(reply_from(SendOutcome::Ignored).is_err());
        let render = ThemeState::new(Theme::Dark, AssetPaths::default()).render();
        assert!(reply_from(SendOutcome::ThemeChanged(render)).is_err());
    }

    #[test]
    fn test_reply_from_failure_keeps_cause() {
        let err = reply_from(SendOutcome::Failed(SummaryError::NoSession)).unwrap_err();
        assert!(err.downcast_ref::<SummaryError>().is_some());
    }
}
