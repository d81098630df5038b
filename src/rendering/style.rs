//! Style markup per output format
//!
//! HTML wraps text in inline tags; the terminal uses SGR escape
//! sequences, except for strikethrough which is drawn with a combining
//! long stroke overlay after every character.

use crate::engine::config::OutputFormat;

pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_HIGHLIGHT: &str = "\x1b[93m";
pub const ANSI_UNDERLINE: &str = "\x1b[4m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// U+0336 COMBINING LONG STROKE OVERLAY
pub const COMBINING_STRIKE: char = '\u{0336}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Highlight,
    Underline,
    Strikethrough,
}

impl Style {
    fn html_tag(self) -> &'static str {
        match self {
            Style::Bold => "b",
            Style::Highlight => "mark",
            Style::Underline => "u",
            Style::Strikethrough => "s",
        }
    }

    /// Wraps `text` in the markup of `format`. The text itself is left as-is.
    pub fn apply(self, text: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => {
                let tag = self.html_tag();
                format!("<{tag}>{text}</{tag}>")
            }
            OutputFormat::Terminal => match self {
                Style::Bold => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
                Style::Highlight => format!("{ANSI_HIGHLIGHT}{text}{ANSI_RESET}"),
                Style::Underline => format!("{ANSI_UNDERLINE}{text}{ANSI_RESET}"),
                Style::Strikethrough => strike_through(text),
            },
            OutputFormat::Text => text.to_string(),
        }
    }
}

fn strike_through(text: &str) -> String {
    let mut struck = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        struck.push(c);
        struck.push(COMBINING_STRIKE);
    }
    struck
}
