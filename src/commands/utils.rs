use crate::parser::{parse_lines_with_stats, ParseOptions};
use crate::source::read_trace_lines;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a trace file and report what was found
pub fn validate_trace_file(file_path: &Path, options: &ParseOptions) -> Result<()> {
    println!("Validating trace: {}", file_path.display());

    let lines = read_trace_lines(file_path)?;
    let (trace, stats) = parse_lines_with_stats(&lines, options)
        .with_context(|| format!("{} is not a valid Xdebug trace", file_path.display()))?;

    println!("✓ Valid Xdebug trace");
    println!("  Version: {}", trace.version);
    println!("  File format: {}", trace.format);
    println!("  Started: {}", trace.start_time);
    println!("  Calls: {}", trace.len());
    println!("  Max depth: {}", trace.max_depth());
    println!("  Body lines: {}", stats.lines);
    println!("  Malformed lines: {}", stats.malformed_lines);
    println!("  Out of order records: {}", stats.out_of_order);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Xdebug Trace Tree v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Call tree reconstruction and HTML rendering for Xdebug function traces.");
}
