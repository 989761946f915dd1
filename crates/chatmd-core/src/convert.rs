//! File-level conversion pipeline

use crate::extract::extract;
use crate::render::{render, OutputFormat};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Derive the output path by replacing the input's extension with `md`
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut output = input.to_path_buf();
    output.set_extension("md");
    output
}

/// Convert one saved conversation file, returning the message count
///
/// The input must be an existing regular file; nothing is read or written
/// before that check passes. The output is written in one shot, with no
/// cleanup of a partially written file on failure.
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<usize, ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let markup = std::fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let messages = extract(&markup);
    let rendered = render(&messages, format);

    std::fs::write(output, rendered).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(messages.len())
}
