//! Highlighter - the bionic reading pipeline
//!
//! text → tokens → classified tokens → fragments → joined body → envelope.
//! Every call starts from scratch; nothing is kept between calls.

use tracing::debug;

use super::config::HighlighterConfig;
use crate::reading::{classify_tokens, split_text, FrequencyCounter, RareWordSource};
use crate::rendering::{envelope, render_body};

/// Applies a [`HighlighterConfig`] to text.
///
/// The rare-word source defaults to a [`FrequencyCounter`] using the
/// configured threshold; any other [`RareWordSource`] can be plugged in.
#[derive(Debug, Clone)]
pub struct Highlighter<R = FrequencyCounter> {
    config: HighlighterConfig,
    rare_words: R,
}

impl Highlighter {
    pub fn new(config: HighlighterConfig) -> Self {
        let rare_words = FrequencyCounter::new(config.rare_word_max_freq());
        Self { config, rare_words }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlighterConfig::default())
    }
}

impl<R: RareWordSource> Highlighter<R> {
    pub fn with_rare_word_source(config: HighlighterConfig, rare_words: R) -> Self {
        Self { config, rare_words }
    }

    pub fn config(&self) -> &HighlighterConfig {
        &self.config
    }

    /// Transforms `text` into the configured output format.
    ///
    /// Never fails: empty text gives an empty body (inside the HTML
    /// document for the HTML format).
    pub fn transform(&self, text: &str) -> String {
        let tokens = split_text(text, self.config.separators());
        let rare_words = self.rare_words.rare_words(text);
        let classified = classify_tokens(&tokens, &rare_words, &self.config);

        debug!(
            tokens = tokens.len(),
            rare_words = rare_words.len(),
            format = self.config.output_format().as_str(),
            "highlighting text"
        );

        envelope(render_body(&classified, &self.config), &self.config)
    }
}

/// One-shot transformation with the default rare-word counter.
pub fn read_faster(text: &str, config: &HighlighterConfig) -> String {
    Highlighter::new(config.clone()).transform(text)
}
