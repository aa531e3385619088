//! Terminal implementation of the widget's view.
//!
//! `TerminalView` keeps an HTML [`Transcript`] alongside the terminal output
//! so `/export` can write the conversation as a page. The loading indicator
//! is an indicatif spinner.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use labchat_core::transcript::Transcript;
use labchat_core::view::{ChatView, LoadingHandle};
use labchat_types::chat::{ChatMessage, ChatRole};
use labchat_types::theme::Theme;

use super::renderer::ChatRenderer;

pub struct TerminalView {
    transcript: Transcript,
    renderer: ChatRenderer,
    spinner: Option<(LoadingHandle, ProgressBar)>,
    print_replies: bool,
}

impl TerminalView {
    /// With `print_replies` off, the view only records the transcript and
    /// shows the spinner; the caller prints the outcome itself.
    pub fn new(theme: Theme, print_replies: bool) -> Self {
        Self {
            transcript: Transcript::new(),
            renderer: ChatRenderer::new(theme),
            spinner: None,
            print_replies,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.renderer = ChatRenderer::new(theme);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    fn spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

impl ChatView for TerminalView {
    fn append_message(&mut self, message: &ChatMessage) {
        self.transcript.append_message(message);

        // The user's line is already on screen from the prompt
        if message.role == ChatRole::User || !self.print_replies {
            return;
        }

        let rendered = match &message.reply {
            Some(reply) => self.renderer.render_reply(reply),
            None => self.renderer.render_notice(&message.content),
        };
        println!();
        println!("  {}", rendered.trim());
        println!();
    }

    fn append_loading_indicator(&mut self) -> LoadingHandle {
        let handle = self.transcript.append_loading_indicator();
        if let Some((_, previous)) = self.spinner.replace((handle, Self::spinner())) {
            previous.finish_and_clear();
        }
        handle
    }

    fn remove_loading_indicator(&mut self, handle: LoadingHandle) {
        self.transcript.remove_loading_indicator(handle);
        if self.spinner.as_ref().is_some_and(|(h, _)| *h == handle) {
            if let Some((_, spinner)) = self.spinner.take() {
                spinner.finish_and_clear();
            }
        }
    }
}
