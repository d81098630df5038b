//! Lossless tokenization
//!
//! Text is cut on a fixed set of separator characters. The cut is
//! capturing: every separator becomes its own token, so joining the
//! tokens gives back the input byte for byte.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::engine::error::ConfigError;

/// Characters that split words in the simple set.
const SIMPLE_SEPARATORS: &[char] = &['\t', ' ', '\n', '-'];

/// Extra punctuation that also splits words in the extended set.
const EXTENDED_PUNCTUATION: &[char] = &[
    '.', '!', '?', ';', ':', '(', ')', '{', '}', '\'', '[', ']', '/',
];

/// Which separator characters cut the text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separators {
    /// Tab, space, newline and hyphen
    #[default]
    Simple,
    /// Simple set plus sentence and bracket punctuation
    Extended,
}

impl Separators {
    pub const NAMES: &'static [&'static str] = &["simple", "extended"];
    const ALL: &'static [Self] = &[Self::Simple, Self::Extended];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Returns true when `c` cuts a token under this set.
    pub fn contains(self, c: char) -> bool {
        match self {
            Separators::Simple => SIMPLE_SEPARATORS.contains(&c),
            Separators::Extended => {
                SIMPLE_SEPARATORS.contains(&c) || EXTENDED_PUNCTUATION.contains(&c)
            }
        }
    }
}

impl FromStr for Separators {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::engine::config::parse_option("separators", s, Self::NAMES, Self::ALL)
    }
}

/// Splits `text` into word and separator tokens.
///
/// Each separator character is emitted as a one-character token. Empty
/// tokens are never produced, so an empty input yields an empty vector.
pub fn split_text(text: &str, separators: Separators) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start = 0;

    for (offset, c) in text.char_indices() {
        if separators.contains(c) {
            if word_start < offset {
                tokens.push(&text[word_start..offset]);
            }
            let end = offset + c.len_utf8();
            tokens.push(&text[offset..end]);
            word_start = end;
        }
    }

    if word_start < text.len() {
        tokens.push(&text[word_start..]);
    }

    tokens
}

/// Returns true when `token` carries no word content.
///
/// A separator token is a single character that is either in the active
/// separator set, a space, tab or newline, or ASCII punctuation. A lone
/// comma between spaces is therefore not counted as a word.
pub fn is_separator(token: &str, separators: Separators) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            separators.contains(c) || matches!(c, ' ' | '\t' | '\n') || c.is_ascii_punctuation()
        }
        _ => false,
    }
}
