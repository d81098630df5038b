use super::{LoadError, LoadedDocument};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Load a UTF-8 text file.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|error| LoadError::Io {
        source_name: path.display().to_string(),
        error,
    })?;

    if text.trim().is_empty() {
        warn!(path = %path.display(), "input file is empty");
    }

    Ok(LoadedDocument {
        text,
        source: format!("file:{}", path.display()),
    })
}

/// Read all of `reader`, typically stdin.
pub fn load_reader<R: Read>(mut reader: R) -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|error| LoadError::Io {
            source_name: "stdin".to_string(),
            error,
        })?;

    Ok(LoadedDocument {
        text,
        source: "stdin".to_string(),
    })
}
