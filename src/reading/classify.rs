//! Token classification and saccade bookkeeping
//!
//! Classification walks the tokens in order, threading the running
//! saccade index through a fold. The index counts word tokens only;
//! stopwords taken over by a non-`keep` behavior are skipped so they do
//! not shift which plain words get a fixation.

use std::collections::HashSet;
use tracing::trace;

use super::fixation::{fixation_split, is_fixation_eligible, saccade_stride};
use super::token::is_separator;
use crate::engine::config::HighlighterConfig;

/// What the renderer should do with a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Whitespace or punctuation, emitted unchanged
    Separator,
    /// Word from the rare-word set
    Rare,
    /// Word from the active stopword tier, handled by the stopword behavior
    Stopword,
    /// Any other word; `split` is the byte offset of the fixation when the
    /// word falls on a saccade
    Plain { split: Option<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    pub text: &'a str,
    pub category: Category,
}

impl<'a> ClassifiedToken<'a> {
    /// Emphasized prefix and plain suffix, when the token has a fixation.
    pub fn fixation(&self) -> Option<(&'a str, &'a str)> {
        match self.category {
            Category::Plain { split: Some(split) } => Some(self.text.split_at(split)),
            _ => None,
        }
    }
}

/// Assigns a category to every token, in order.
///
/// Precedence for word tokens: rare, then stopword (unless the behavior
/// is `keep`), then plain.
pub fn classify_tokens<'a>(
    tokens: &[&'a str],
    rare_words: &HashSet<String>,
    config: &HighlighterConfig,
) -> Vec<ClassifiedToken<'a>> {
    let stride = saccade_stride(config.saccades());
    let stopwords = config.stopword_tier();
    let handles_stopwords = config.stopword_behavior().handles_stopwords();

    tokens
        .iter()
        .scan(0usize, |index, &text| {
            let category = if is_separator(text, config.separators()) {
                Category::Separator
            } else if rare_words.contains(&text.to_lowercase()) {
                *index += 1;
                Category::Rare
            } else if handles_stopwords && stopwords.contains(text) {
                Category::Stopword
            } else {
                *index += 1;
                let split = is_fixation_eligible(*index, stride)
                    .then(|| fixation_split(text, config.fixation()));
                Category::Plain { split }
            };

            trace!(token = text, index = *index, ?category, "classified token");
            Some(ClassifiedToken { text, category })
        })
        .collect()
}
