pub mod config;
pub mod error;
pub mod highlighter;
pub mod settings;

pub use config::{
    HighlighterConfig, HighlighterConfigBuilder, OutputFormat, RareWordBehavior, StopwordBehavior,
};
pub use error::ConfigError;
pub use highlighter::{read_faster, Highlighter};
pub use settings::{Settings, SettingsError};
