//! Render command implementation.
//!
//! The render command:
//! 1. Reads the trace file
//! 2. Parses header and records into a call table
//! 3. Renders the call tree as HTML
//! 4. Writes output files

use super::models::RenderArgs;
use crate::output::{write_html, write_trace_json};
use crate::parser::parse_lines;
use crate::render::{generate_text_summary, render_html};
use crate::source::read_trace_lines;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Upper bound for the text summary length
const MAX_SUMMARY_LINES: usize = 100_000;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file cannot be read
/// * Trace header is malformed (strict header policy)
/// * Output files cannot be written
///
/// # Example
/// ```ignore
/// let args = RenderArgs {
///     input: PathBuf::from("trace.xt"),
///     output_html: PathBuf::from("trace.xt.html"),
///     ..Default::default()
/// };
///
/// execute_render(args)?;
/// ```
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering trace: {}", args.input.display());

    // Step 1: Read trace
    info!("Step 1/3: Reading trace file...");
    let lines = read_trace_lines(&args.input).context("Failed to read trace file")?;

    // Step 2: Parse trace
    info!("Step 2/3: Parsing trace...");
    let trace = parse_lines(&lines, &args.parse_options)
        .with_context(|| format!("{} is not a valid Xdebug trace", args.input.display()))?;

    debug!(
        "Parsed trace: version {}, {} calls, max depth {}",
        trace.version,
        trace.len(),
        trace.max_depth()
    );

    // Step 3: Render and write outputs
    info!("Step 3/3: Writing output files...");
    let html = render_html(&trace, &args.html_config);
    write_html(&html, &args.output_html).context("Failed to write HTML")?;

    info!("✓ HTML written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        write_trace_json(&trace, json_path).context("Failed to write JSON export")?;

        info!("✓ JSON written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CALL TREE");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&trace, args.summary_lines));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input trace not found: {}", args.input.display());
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("HTML output path cannot be empty");
    }

    if args.output_html == args.input {
        anyhow::bail!("HTML output would overwrite the input trace");
    }

    if args.output_json.as_ref() == Some(&args.input) {
        anyhow::bail!("JSON output would overwrite the input trace");
    }

    if args.print_summary && args.summary_lines == 0 {
        anyhow::bail!("summary_lines must be greater than 0");
    }

    if args.summary_lines > MAX_SUMMARY_LINES {
        anyhow::bail!("summary_lines is too large (max {})", MAX_SUMMARY_LINES);
    }

    Ok(())
}
