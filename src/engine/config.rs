// Configuration for the highlighter
// Values are validated once in the builder; a built config is immutable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;
use crate::reading::stopwords::StopwordTier;
use crate::reading::token::Separators;
use crate::rendering::style::Style;

/// What happens to words from the active stopword tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordBehavior {
    /// Treat stopwords like any other word
    #[default]
    Keep,
    /// Drop stopwords from the output
    Remove,
    /// Emit stopwords without any emphasis
    Ignore,
    Highlight,
    Strikethrough,
    Bold,
}

impl StopwordBehavior {
    pub const NAMES: &'static [&'static str] = &[
        "keep",
        "remove",
        "ignore",
        "highlight",
        "strikethrough",
        "bold",
    ];
    const ALL: &'static [Self] = &[
        Self::Keep,
        Self::Remove,
        Self::Ignore,
        Self::Highlight,
        Self::Strikethrough,
        Self::Bold,
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// False only for `keep`, where stopwords go through the plain path.
    pub fn handles_stopwords(self) -> bool {
        self != StopwordBehavior::Keep
    }

    /// Style wrapped around a stopword, if the behavior restyles it.
    pub fn style(self) -> Option<Style> {
        match self {
            StopwordBehavior::Highlight => Some(Style::Highlight),
            StopwordBehavior::Strikethrough => Some(Style::Strikethrough),
            StopwordBehavior::Bold => Some(Style::Bold),
            StopwordBehavior::Keep | StopwordBehavior::Remove | StopwordBehavior::Ignore => None,
        }
    }
}

impl FromStr for StopwordBehavior {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("stopword_behavior", s, Self::NAMES, Self::ALL)
    }
}

/// Style given to rare words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RareWordBehavior {
    #[default]
    Highlight,
    Underline,
    Bold,
}

impl RareWordBehavior {
    pub const NAMES: &'static [&'static str] = &["highlight", "underline", "bold"];
    const ALL: &'static [Self] = &[Self::Highlight, Self::Underline, Self::Bold];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    pub fn style(self) -> Style {
        match self {
            RareWordBehavior::Highlight => Style::Highlight,
            RareWordBehavior::Underline => Style::Underline,
            RareWordBehavior::Bold => Style::Bold,
        }
    }
}

impl FromStr for RareWordBehavior {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("rare_word_behavior", s, Self::NAMES, Self::ALL)
    }
}

/// Target of the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML document with inline tags
    #[default]
    Html,
    /// ANSI escape sequences
    Terminal,
    /// No styling at all
    Text,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["html", "terminal", "text"];
    const ALL: &'static [Self] = &[Self::Html, Self::Terminal, Self::Text];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("output_format", s, Self::NAMES, Self::ALL)
    }
}

/// Case-insensitive lookup of `value` among `names`, returning the
/// variant at the same position in `variants`.
pub(crate) fn parse_option<T: Copy>(
    field: &'static str,
    value: &str,
    names: &'static [&'static str],
    variants: &[T],
) -> Result<T, ConfigError> {
    let wanted = value.trim().to_ascii_lowercase();
    names
        .iter()
        .position(|name| *name == wanted)
        .map(|i| variants[i])
        .ok_or_else(|| ConfigError::UnknownOption {
            field,
            expected: names,
            value: value.to_string(),
        })
}

/// Validated highlighter settings.
///
/// Built through [`HighlighterConfig::builder`]; fields are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlighterConfig {
    fixation: f64,
    saccades: f64,
    opacity: f64,
    stopword_strength: f64,
    stopword_behavior: StopwordBehavior,
    rare_word_behavior: RareWordBehavior,
    style_rare_words: bool,
    rare_word_max_freq: usize,
    output_format: OutputFormat,
    separators: Separators,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            fixation: 0.6,
            saccades: 0.75,
            opacity: 0.75,
            stopword_strength: 0.25,
            stopword_behavior: StopwordBehavior::default(),
            rare_word_behavior: RareWordBehavior::default(),
            style_rare_words: true,
            rare_word_max_freq: 5,
            output_format: OutputFormat::default(),
            separators: Separators::default(),
        }
    }
}

impl HighlighterConfig {
    pub fn builder() -> HighlighterConfigBuilder {
        HighlighterConfigBuilder::default()
    }

    /// Fraction of a word emphasized as its fixation
    pub fn fixation(&self) -> f64 {
        self.fixation
    }

    /// Ratio that picks the saccade stride
    pub fn saccades(&self) -> f64 {
        self.saccades
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn stopword_tier(&self) -> StopwordTier {
        StopwordTier::from_strength(self.stopword_strength)
    }

    pub fn stopword_behavior(&self) -> StopwordBehavior {
        self.stopword_behavior
    }

    pub fn rare_word_behavior(&self) -> RareWordBehavior {
        self.rare_word_behavior
    }

    pub fn style_rare_words(&self) -> bool {
        self.style_rare_words
    }

    pub fn rare_word_max_freq(&self) -> usize {
        self.rare_word_max_freq
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// CSS font weight for emphasized text, `round(opacity * 1000)`.
    pub fn font_weight(&self) -> u32 {
        (self.opacity * 1000.0).round() as u32
    }
}

/// Collects settings and validates them in [`build`](Self::build).
///
/// Unset fields fall back to [`HighlighterConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct HighlighterConfigBuilder {
    fixation: Option<f64>,
    saccades: Option<f64>,
    opacity: Option<f64>,
    stopword_strength: Option<f64>,
    stopword_behavior: Option<StopwordBehavior>,
    rare_word_behavior: Option<RareWordBehavior>,
    style_rare_words: Option<bool>,
    rare_word_max_freq: Option<usize>,
    output_format: Option<OutputFormat>,
    separators: Option<Separators>,
}

impl HighlighterConfigBuilder {
    pub fn fixation(mut self, value: f64) -> Self {
        self.fixation = Some(value);
        self
    }

    pub fn saccades(mut self, value: f64) -> Self {
        self.saccades = Some(value);
        self
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn stopword_strength(mut self, value: f64) -> Self {
        self.stopword_strength = Some(value);
        self
    }

    pub fn stopword_behavior(mut self, value: StopwordBehavior) -> Self {
        self.stopword_behavior = Some(value);
        self
    }

    pub fn rare_word_behavior(mut self, value: RareWordBehavior) -> Self {
        self.rare_word_behavior = Some(value);
        self
    }

    pub fn style_rare_words(mut self, value: bool) -> Self {
        self.style_rare_words = Some(value);
        self
    }

    pub fn rare_word_max_freq(mut self, value: usize) -> Self {
        self.rare_word_max_freq = Some(value);
        self
    }

    pub fn output_format(mut self, value: OutputFormat) -> Self {
        self.output_format = Some(value);
        self
    }

    pub fn separators(mut self, value: Separators) -> Self {
        self.separators = Some(value);
        self
    }

    /// Validates the collected settings.
    ///
    /// # Errors
    /// Returns [`ConfigError::OutOfRange`] for the first ratio outside
    /// [0, 1] (NaN included).
    pub fn build(self) -> Result<HighlighterConfig, ConfigError> {
        let defaults = HighlighterConfig::default();
        Ok(HighlighterConfig {
            fixation: check_unit("fixation", self.fixation.unwrap_or(defaults.fixation))?,
            saccades: check_unit("saccades", self.saccades.unwrap_or(defaults.saccades))?,
            opacity: check_unit("opacity", self.opacity.unwrap_or(defaults.opacity))?,
            stopword_strength: check_unit(
                "stopword_strength",
                self.stopword_strength.unwrap_or(defaults.stopword_strength),
            )?,
            stopword_behavior: self.stopword_behavior.unwrap_or(defaults.stopword_behavior),
            rare_word_behavior: self.rare_word_behavior.unwrap_or(defaults.rare_word_behavior),
            style_rare_words: self.style_rare_words.unwrap_or(defaults.style_rare_words),
            rare_word_max_freq: self.rare_word_max_freq.unwrap_or(defaults.rare_word_max_freq),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            separators: self.separators.unwrap_or(defaults.separators),
        })
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
