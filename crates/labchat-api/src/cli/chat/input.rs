//! Prompt input for the chat loop.
//!
//! Reads lines with `rustyline_async` and classifies them: slash commands
//! are parsed here, everything else is handed to the widget as message text.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

use super::commands::{self, ChatCommand};

#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// Text for the widget's input field. Left untrimmed; the widget decides
    /// whether it is blank.
    Message(String),
    /// A slash command.
    Command(ChatCommand),
    /// Ctrl+D, or the terminal went away.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

impl InputEvent {
    fn from_line(line: String) -> Self {
        match commands::parse(&line) {
            Some(cmd) => InputEvent::Command(cmd),
            None => InputEvent::Message(line),
        }
    }
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Returns the input handler and a `SharedWriter` for output that must
    /// not tear the prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => InputEvent::from_line(line),
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(e) => {
                tracing::debug!(error = %e, "Readline failed, treating as end of input");
                InputEvent::Eof
            }
        }
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
