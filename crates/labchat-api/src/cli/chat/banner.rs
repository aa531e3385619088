//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the backend,
//! the session and its shareable location.

use console::style;

use labchat_types::session::Session;
use labchat_types::theme::Theme;

/// Print the welcome banner at the start of a chat session.
///
/// When no session could be acquired, says so instead of showing an id.
pub fn print_welcome_banner(base_url: &str, session: Option<&Session>, theme: Theme) {
    println!();
    println!("  * {}", style("labchat").cyan().bold());
    println!("  {}", style("Ask questions, get summaries with references.").dim());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(base_url).dim());
    match session {
        Some(session) => {
            println!(
                "  {}  {}",
                style("Session:").bold(),
                style(short_id(session.id.as_str())).dim()
            );
            println!("  {}    {}", style("Share:").bold(), style(&session.share_url).dim());
        }
        None => {
            println!(
                "  {}  {}",
                style("Session:").bold(),
                style("unavailable (messages will not be sent)").yellow()
            );
        }
    }
    println!("  {}    {}", style("Theme:").bold(), style(theme).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}

/// First eight characters of a session id. Ids are opaque backend strings,
/// so the cut is on a char boundary, never a byte offset.
fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use labchat_types::session::SessionId;

    use super::*;

    #[test]
    fn test_short_id_truncates_uuid() {
        assert_eq!(short_id("0b6f5c1e-7a2d-4c1b-9e0f-123456789abc"), "0b6f5c1e");
    }

    #[test]
    fn test_short_id_keeps_short_ids() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_short_id_non_ascii_does_not_split_chars() {
        assert_eq!(short_id("abcdefgé-1"), "abcdefgé");
        assert_eq!(short_id("会话会话会话会话会话"), "会话会话会话会话");
    }

    #[test]
    fn test_banner_prints_non_ascii_session() {
        let session = Session::new(SessionId::from("abcdefgé-1"), "http://127.0.0.1:8000");
        print_welcome_banner("http://127.0.0.1:8000", Some(&session), Theme::Dark);
    }
}
