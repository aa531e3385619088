//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session bootstrap, welcome banner,
//! the input loop, slash commands, and sends through the widget.

use std::path::Path;

use console::style;
use tracing::info;

use labchat_core::widget::{ChatWidget, SendOutcome, WidgetEvent};
use labchat_infra::http::HttpChatBackend;
use labchat_types::error::SummaryError;

use crate::cli::history::print_history;
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::view::TerminalView;

type TerminalWidget = ChatWidget<HttpChatBackend, TerminalView>;

/// Run the interactive chat loop against the configured backend.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let client = state.summary_client()?;
    let view = TerminalView::new(state.config.theme, true);
    let mut widget = ChatWidget::new(client, view, state.config.theme)
        .with_record_history(state.config.record_history);

    let render = widget.on_load().await;
    print_welcome_banner(&state.config.base_url, widget.session(), render.theme);
    if let Some(session) = widget.session() {
        info!(session_id = %session.id, "Chat session started");
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Command(cmd) => match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => {
                    chat_input.clear();
                    widget.view_mut().clear();
                }
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::Theme => toggle_theme(&mut widget).await,
                ChatCommand::Session => print_session(&widget),
                ChatCommand::History => match widget.session_history().await {
                    Ok(history) => print_history(&history),
                    Err(e) => print_error("Could not load history", &e),
                },
                ChatCommand::Save => match widget.save_last_reply().await {
                    Ok(()) => println!("\n  {} Saved.\n", style("*").cyan().bold()),
                    Err(e) => print_error("Could not save", &e),
                },
                ChatCommand::Export(path) => {
                    if let Err(e) = export_transcript(&widget, &path).await {
                        print_error("Could not export", &e);
                    }
                }
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                }
            },
            InputEvent::Message(text) => {
                widget.handle(WidgetEvent::Input(text)).await;
                match widget.handle(WidgetEvent::SendClicked).await {
                    SendOutcome::Failed(SummaryError::NoSession) => {
                        eprintln!(
                            "\n  {} No session: is the backend at {} running? Restart to retry.\n",
                            style("!").yellow().bold(),
                            state.config.base_url
                        );
                    }
                    SendOutcome::Failed(_) => {
                        eprintln!("  {}", style("Type a message to retry, /exit to quit.").dim());
                    }
                    SendOutcome::Replied(_) | SendOutcome::Ignored | SendOutcome::ThemeChanged(_) => {}
                }
            }
        }
    }

    Ok(())
}

async fn toggle_theme(widget: &mut TerminalWidget) {
    if let SendOutcome::ThemeChanged(render) = widget.handle(WidgetEvent::ToggleMode).await {
        widget.view_mut().set_theme(render.theme);
        println!("\n  {} Theme: {}\n", style("*").cyan().bold(), render.theme);
    }
}

fn print_session(widget: &TerminalWidget) {
    println!();
    match widget.session() {
        Some(session) => {
            println!("  {}  {}", style("Session:").bold(), session.id);
            println!("  {}    {}", style("Share:").bold(), session.share_url);
        }
        None => println!("  {}", style("No session.").yellow()),
    }
    println!();
}

async fn export_transcript(widget: &TerminalWidget, path: &Path) -> anyhow::Result<()> {
    let html = widget.view().transcript().to_html_document(&widget.theme());
    tokio::fs::write(path, html).await?;
    println!("\n  {} Transcript written to {}\n", style("*").cyan().bold(), path.display());
    Ok(())
}

fn print_error(context: &str, err: &dyn std::fmt::Display) {
    eprintln!("\n  {} {context}: {err}\n", style("!").red().bold());
}
