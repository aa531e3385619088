//! Terminal rendering of bot replies.
//!
//! `ChatRenderer` renders the normalized summary through `termimad` and the
//! reference list with `console` styles. The skin follows the widget theme.

use crossterm::style::Color;
use termimad::MadSkin;

use console::style;
use labchat_types::summary::BotReply;
use labchat_types::theme::Theme;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new(theme: Theme) -> Self {
        let (mut skin, accent) = match theme {
            Theme::Dark => (MadSkin::default_dark(), Color::Cyan),
            Theme::Light => (MadSkin::default_light(), Color::Blue),
        };

        let tc = Self::crossterm_to_termimad(accent);
        skin.bold.set_fg(tc);
        skin.bullet.set_fg(tc);

        Self { skin }
    }

    /// Render a reply: summary prose followed by numbered references.
    pub fn render_reply(&self, reply: &BotReply) -> String {
        let mut output = format!("{}", self.skin.term_text(&reply.summary));

        if !reply.references.is_empty() {
            output.push_str(&format!("\n  {}\n", style("References:").bold()));
            for (i, reference) in reply.references.iter().enumerate() {
                let source = if reference.is_link() {
                    style(reference.source.as_str()).cyan().underlined()
                } else {
                    style(reference.source.as_str())
                };
                output.push_str(&format!("  {}. {}\n", i + 1, source));
                if let Some(snippet) = &reference.snippet {
                    output.push_str(&format!("     {}\n", style(snippet).dim()));
                }
            }
        }

        output
    }

    /// Render a bot message that has no structured reply (e.g. the failure notice).
    pub fn render_notice(&self, text: &str) -> String {
        format!("{}", style(text).red())
    }

    /// Convert a crossterm Color to termimad Color.
    fn crossterm_to_termimad(color: Color) -> termimad::crossterm::style::Color {
        match color {
            Color::Cyan => termimad::crossterm::style::Color::Cyan,
            Color::Blue => termimad::crossterm::style::Color::Blue,
            Color::Green => termimad::crossterm::style::Color::Green,
            Color::Yellow => termimad::crossterm::style::Color::Yellow,
            Color::Magenta => termimad::crossterm::style::Color::Magenta,
            Color::Red => termimad::crossterm::style::Color::Red,
            Color::Rgb { r, g, b } => termimad::crossterm::style::Color::Rgb { r, g, b },
            _ => termimad::crossterm::style::Color::Cyan,
        }
    }
}
