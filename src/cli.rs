//! Command-line front end
//!
//! Settings are layered: defaults, then the `--config` YAML file, then
//! individual flags.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use bionic::engine::{
    Highlighter, HighlighterConfig, OutputFormat, RareWordBehavior, Settings, StopwordBehavior,
};
use bionic::input::{self, LoadError, LoadedDocument};
use bionic::reading::Separators;

#[derive(Parser, Debug)]
#[command(name = "bionic", version, about = "Bionic reading for plain text")]
pub struct Cli {
    /// Text, PDF or EPUB file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Read the text from the system clipboard
    #[arg(long, conflicts_with = "input")]
    pub clipboard: bool,

    /// YAML settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fraction of each word emphasized, 0 to 1
    #[arg(long)]
    pub fixation: Option<f64>,

    /// Emphasis frequency, 0 (every third word) to 1 (every word)
    #[arg(long)]
    pub saccades: Option<f64>,

    /// Weight of emphasized text in HTML, 0 to 1
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Size of the stopword list, 0 to 1
    #[arg(long)]
    pub stopword_strength: Option<f64>,

    /// keep, remove, ignore, highlight, strikethrough or bold
    #[arg(long)]
    pub stopword_behavior: Option<StopwordBehavior>,

    /// highlight, underline or bold
    #[arg(long)]
    pub rare_word_behavior: Option<RareWordBehavior>,

    /// Words seen more often than this are flagged
    #[arg(long)]
    pub rare_word_max_freq: Option<usize>,

    /// Leave flagged words unstyled
    #[arg(long)]
    pub no_rare_styling: bool,

    /// html, terminal or text
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// simple or extended
    #[arg(long)]
    pub separators: Option<Separators>,

    /// Write the result to FILE instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the effective settings as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn build_config(&self) -> Result<HighlighterConfig, Box<dyn Error>> {
        let mut builder = HighlighterConfig::builder();

        if let Some(path) = &self.config {
            builder = Settings::load(path)?.apply(builder);
        }
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
        if let Some(value) = self.rare_word_max_freq {
            builder = builder.rare_word_max_freq(value);
        }
        if self.no_rare_styling {
            builder = builder.style_rare_words(false);
        }
        if let Some(value) = self.format {
            builder = builder.output_format(value);
        }
        if let Some(value) = self.separators {
            builder = builder.separators(value);
        }

        Ok(builder.build()?)
    }

    pub fn load_input(&self) -> Result<LoadedDocument, LoadError> {
        if self.clipboard {
            return input::clipboard::load();
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => input::load_path(path),
            _ => input::text::load_reader(io::stdin().lock()),
        }
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let highlighter = Highlighter::new(cli.build_config()?);

    if cli.print_config {
        print!("{}", serde_yaml::to_string(highlighter.config())?);
        return Ok(());
    }

    let document = cli.load_input()?;
    info!(
        source = %document.source,
        bytes = document.text.len(),
        format = highlighter.config().output_format().as_str(),
        "loaded input"
    );

    let output = highlighter.transform(&document.text);

    match &cli.output {
        Some(path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
