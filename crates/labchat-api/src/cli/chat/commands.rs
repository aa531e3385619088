//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the session,
//! theme, backend history, and transcript export.

use std::path::PathBuf;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Switch between light and dark rendering.
    Theme,
    /// Show the session id and share location.
    Session,
    /// Show the history the backend recorded for this session.
    History,
    /// Save the last reply on the backend.
    Save,
    /// Write the transcript as an HTML page.
    Export(PathBuf),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/theme" | "/mode" => Some(ChatCommand::Theme),
        "/session" => Some(ChatCommand::Session),
        "/history" => Some(ChatCommand::History),
        "/save" => Some(ChatCommand::Save),
        "/export" => match arg {
            Some(path) => Some(ChatCommand::Export(PathBuf::from(path))),
            None => Some(ChatCommand::Unknown("/export requires a file path".to_string())),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}          {}", style("/help").cyan(), "Show this help message");
    println!("  {}         {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}          {}", style("/exit").cyan(), "End the chat session");
    println!("  {}         {}", style("/theme").cyan(), "Toggle light/dark mode");
    println!("  {}       {}", style("/session").cyan(), "Show session id and share link");
    println!("  {}       {}", style("/history").cyan(), "Show history recorded by the backend");
    println!("  {}          {}", style("/save").cyan(), "Save the last reply on the backend");
    println!("  {} {}", style("/export <file>").cyan(), "Write the transcript as HTML");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse("/theme"), Some(ChatCommand::Theme));
        assert_eq!(parse("  /mode  "), Some(ChatCommand::Theme));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            parse("/export chat.html"),
            Some(ChatCommand::Export(PathBuf::from("chat.html")))
        );
        assert_eq!(
            parse("/export   "),
            Some(ChatCommand::Unknown("/export requires a file path".to_string()))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("how do heat pumps work?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
