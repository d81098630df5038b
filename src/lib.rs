//! Bionic reading for plain text
//!
//! Emphasizes the leading letters of words so the eye can skim, restyles
//! or drops stopwords, and flags words that recur through the document.
//!
//! ```
//! use bionic::engine::{Highlighter, HighlighterConfig, OutputFormat};
//!
//! let config = HighlighterConfig::builder()
//!     .output_format(OutputFormat::Terminal)
//!     .build()
//!     .unwrap();
//! let output = Highlighter::new(config).transform("Read faster");
//! assert_eq!(output, "\x1b[1mRe\x1b[0mad \x1b[1mfast\x1b[0mer");
//! ```

pub mod engine;
pub mod input;
pub mod reading;
pub mod rendering;

pub use engine::{read_faster, ConfigError, Highlighter, HighlighterConfig};
