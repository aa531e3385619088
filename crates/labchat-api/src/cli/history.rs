//! `labchat history` -- show the messages a backend session recorded.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use labchat_core::backend::ChatBackend;
use labchat_types::chat::HistoryEntry;
use labchat_types::session::SessionId;

use crate::state::AppState;

/// Print a session's recorded history as a table, or as JSON.
///
/// # Examples
///
/// ```bash
/// labchat history 0b6f5c1e-...
/// labchat history 0b6f5c1e-... --json
/// ```
pub async fn show_history(state: &AppState, session_id: &str, json: bool) -> Result<()> {
    let backend = state.backend()?;
    let history = backend
        .session_history(&SessionId::from(session_id))
        .await
        .with_context(|| format!("Failed to load history for session '{session_id}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    print_history(&history);
    Ok(())
}

/// Render history entries as a numbered table.
pub fn print_history(history: &[HistoryEntry]) {
    if history.is_empty() {
        println!();
        println!("  {}", style("No messages recorded for this session.").dim());
        println!();
        return;
    }

    println!();
    println!("{}", history_table(history));
    println!();
}

fn history_table(history: &[HistoryEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Message").fg(Color::White),
    ]);

    for (i, entry) in history.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(entry.role.to_string()).fg(Color::Green),
            Cell::new(&entry.message),
        ]);
    }

    table
}
