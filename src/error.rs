//! Error types for digest parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the file entry point.
///
/// Only path validation fails loudly. Anomalies inside the message itself
/// never produce an error; they stop extraction early and the partial
/// [`Message`](crate::Message) collected so far is returned instead.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The supplied path was empty or blank
    #[error("path is empty or blank")]
    InvalidPath,

    /// The supplied path does not point at an existing file
    #[error("message file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be opened
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for digest parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
