//! JSON trace export writer.
//!
//! Writes a parsed trace, wrapped in a versioned envelope, to JSON files.

use crate::parser::schema::Trace;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceExport {
    /// Export schema version for compatibility checking
    pub schema_version: String,

    /// Timestamp when the export was generated
    pub generated_at: String,

    pub trace: Trace,
}

/// Wrap a trace in the export envelope
pub fn to_export(trace: &Trace) -> TraceExport {
    use chrono::Utc;

    TraceExport {
        schema_version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        trace: trace.clone(),
    }
}

/// Write a trace to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_trace_json(trace: &Trace, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON export to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &to_export(trace))
        .map_err(OutputError::SerializationFailed)?;

    info!(
        "JSON export written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a JSON export back
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_trace_json(input_path: impl AsRef<Path>) -> Result<TraceExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON export from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let export: TraceExport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Export loaded: schema {}, {} calls",
        export.schema_version,
        export.trace.len()
    );

    Ok(export)
}
