//! Line reader for trace files.
//!
//! Argument dumps in a trace are raw PHP values and may hold bytes that are
//! not valid UTF-8, so lines are decoded lossily instead of failing.

use crate::utils::error::SourceError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a trace file into lines
///
/// **Public** - main entry point for trace input
///
/// # Errors
/// * `SourceError::Io` - file cannot be opened or read
pub fn read_trace_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    info!("Reading trace from: {}", path.display());

    let file = File::open(path).map_err(io_error)?;
    let lines = read_lines(BufReader::new(file)).map_err(io_error)?;

    debug!("Read {} lines", lines.len());

    Ok(lines)
}

/// Split a reader into lines, dropping `\n` or `\r\n` terminators
pub fn read_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }

        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }

    Ok(lines)
}
