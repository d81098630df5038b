//! Rare-word detection
//!
//! Any whole-document word counter can stand behind [`RareWordSource`];
//! [`FrequencyCounter`] is the default one.

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Supplies the lower-cased words that get the rare-word style.
pub trait RareWordSource {
    fn rare_words(&self, text: &str) -> HashSet<String>;
}

/// Counts every word of the document and flags those seen more than
/// `max_freq` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyCounter {
    pub max_freq: usize,
}

impl FrequencyCounter {
    pub fn new(max_freq: usize) -> Self {
        Self { max_freq }
    }
}

impl RareWordSource for FrequencyCounter {
    fn rare_words(&self, text: &str) -> HashSet<String> {
        count_words(text)
            .into_iter()
            .filter(|(word, count)| *count > self.max_freq && !contains_digit(word))
            .map(|(word, _)| word)
            .collect()
    }
}

/// Builds a lower-cased histogram of the words in `text`.
///
/// Words are cut on Unicode word boundaries; single-character words are
/// not counted.
pub fn count_words(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in text.unicode_words() {
        if word.chars().nth(1).is_none() {
            continue;
        }
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Decimal digits only; number forms such as `½` or `Ⅷ` do not count.
fn contains_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}
