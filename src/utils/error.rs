//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the header lines of a trace.
///
/// A header failure means the input is most likely not an Xdebug trace,
/// so these are surfaced to the caller instead of being zero-filled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Trace too short: expected at least 4 header lines, found {lines}")]
    Truncated { lines: usize },

    #[error("Missing 'Version: X.Y.Z' header")]
    MissingVersion,

    #[error("Missing 'File format: N' header")]
    MissingFormat,

    #[error("Invalid TRACE START line: {line:?}")]
    InvalidStartTime { line: String },
}

/// Errors for a single body line. Always recovered by the assembler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{kind} record has {found} fields, needs at least {required}")]
    TooFewFields {
        kind: &'static str,
        found: usize,
        required: usize,
    },

    #[error("Unknown record kind: {0:?}")]
    UnknownKind(String),
}

/// Errors that can occur while reading a trace file
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read trace {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
