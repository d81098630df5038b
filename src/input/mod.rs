//! Input sources for text to highlight
//!
//! Plain-text, PDF and EPUB files, the system clipboard and stdin all
//! produce a [`LoadedDocument`] holding raw text.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Cannot read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
}

/// Raw text plus a short description of where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

/// Loads a file, choosing the loader from its extension.
///
/// `.pdf` and `.epub` (case-insensitive) go to their parsers; anything
/// else is read as UTF-8 text.
pub fn load_path(path: &Path) -> Result<LoadedDocument, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}
