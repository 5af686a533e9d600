//! Input line acquisition
//!
//! Supplies raw declaration lines from a file or any buffered reader, keeping
//! I/O failures distinct from the parse errors raised downstream.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while acquiring input lines
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot read input source {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed reading from input stream: {source}")]
    Stream { source: std::io::Error },

    #[error("Input source contains no lines")]
    Empty,
}

/// Read all declaration lines from a file.
///
/// Blank lines are not filtered out; they reach the parser and fail there as
/// malformed. A source with no lines at all is an error of its own.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::Unavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input source");

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    if lines.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(lines)
}

/// Collect all declaration lines from a buffered reader.
///
/// Stream counterpart of [`read_lines`], with the same empty-source check.
pub fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| SourceError::Stream { source: e })?);
    }
    if lines.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    include!("source.test.rs");
}
