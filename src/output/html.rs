//! HTML document output writer.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write rendered HTML lines to a file, one per line
///
/// **Public** - main entry point for HTML output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html<S: AsRef<str>>(
    lines: &[S],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML to: {}", output_path.display());

    super::validate_path(output_path)?;

    if let Some(ext) = output_path.extension() {
        if ext != "html" && ext != "htm" {
            debug!("Warning: File does not have .html extension: {}", output_path.display());
        }
    }

    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    let mut written = 0usize;
    for line in lines {
        let line = line.as_ref();
        writeln!(writer, "{}", line).map_err(OutputError::WriteFailed)?;
        written += line.len() + 1;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "HTML written successfully ({} bytes, {:.2} KB)",
        written,
        written as f64 / 1024.0
    );

    Ok(())
}
