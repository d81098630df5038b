//! YAML settings files
//!
//! A settings file is a flat map of configuration fields:
//!
//! ```yaml
//! fixation: 0.6
//! saccades: 0.75
//! stopword_behavior: strikethrough
//! output_format: terminal
//! ```
//!
//! Every field is optional. The values are typed by serde; ratio ranges
//! are checked when the builder is built, like any other source of
//! settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::config::{HighlighterConfigBuilder, OutputFormat, RareWordBehavior, StopwordBehavior};
use crate::reading::token::Separators;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub fixation: Option<f64>,
    pub saccades: Option<f64>,
    pub opacity: Option<f64>,
    #[serde(alias = "stopwords")]
    pub stopword_strength: Option<f64>,
    pub stopword_behavior: Option<StopwordBehavior>,
    pub rare_word_behavior: Option<RareWordBehavior>,
    pub style_rare_words: Option<bool>,
    pub rare_word_max_freq: Option<usize>,
    #[serde(alias = "format")]
    pub output_format: Option<OutputFormat>,
    pub separators: Option<Separators>,
}

impl Settings {
    /// Parses a YAML settings document. A blank document sets nothing.
    pub fn parse(yaml: &str) -> Result<Self, SettingsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&yaml)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Copies every field present in the file onto `builder`.
    pub fn apply(self, mut builder: HighlighterConfigBuilder) -> HighlighterConfigBuilder {
        if let Some(value) = self.fixation {
            builder = builder.fixation(value);
        }
        if let Some(value) = self.saccades {
            builder = builder.saccades(value);
        }
        if let Some(value) = self.opacity {
            builder = builder.opacity(value);
        }
        if let Some(value) = self.stopword_strength {
            builder = builder.stopword_strength(value);
        }
        if let Some(value) = self.stopword_behavior {
            builder = builder.stopword_behavior(value);
        }
        if let Some(value) = self.rare_word_behavior {
            builder = builder.rare_word_behavior(value);
        }
        if let Some(value) = self.style_rare_words {
            builder = builder.style_rare_words(value);
        }
        if let Some(value) = self.rare_word_max_freq {
            builder = builder.rare_word_max_freq(value);
        }
        if let Some(value) = self.output_format {
            builder = builder.output_format(value);
        }
        if let Some(value) = self.separators {
            builder = builder.separators(value);
        }
        builder
    }
}
