//! Xdebug Trace Tree CLI
//!
//! Renders Xdebug function traces as nested HTML call trees.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xdebug_trace_tree::commands::{
    default_html_path, display_version, execute_render, validate_args, validate_trace_file,
    RenderArgs,
};
use xdebug_trace_tree::parser::{HeaderPolicy, ParseOptions};
use xdebug_trace_tree::render::HtmlConfig;

/// Xdebug Trace Tree - call tree viewer for Xdebug traces
#[derive(Parser, Debug)]
#[command(name = "xdebug-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a trace file as an HTML call tree
    Render {
        /// Xdebug trace file (.xt)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for HTML (defaults to <input>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the parsed trace as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Stylesheet href linked from the document
        #[arg(long, default_value = "style.css", env = "XDEBUG_TRACE_STYLESHEET")]
        stylesheet: String,

        /// Script src included at the end of the document
        #[arg(long, default_value = "script.js", env = "XDEBUG_TRACE_SCRIPT")]
        script: String,

        /// Zero-fill malformed header lines instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print text call tree to stdout
        #[arg(long)]
        summary: bool,

        /// Number of calls in the text call tree
        #[arg(long, default_value = "50")]
        summary_lines: usize,
    },

    /// Parse a trace file and report header and line counts
    Validate {
        /// Xdebug trace file (.xt)
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-fill malformed header lines instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Display version information
    Version,
}

fn parse_options(lenient: bool) -> ParseOptions {
    let policy = if lenient {
        HeaderPolicy::Lenient
    } else {
        HeaderPolicy::Strict
    };
    ParseOptions::new().with_header_policy(policy)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            output,
            json,
            title,
            stylesheet,
            script,
            lenient,
            summary,
            summary_lines,
        } => {
            let output_html = output.unwrap_or_else(|| default_html_path(&input));

            let mut html_config = HtmlConfig::new()
                .with_stylesheet(Some(stylesheet).filter(|s| !s.is_empty()))
                .with_script(Some(script).filter(|s| !s.is_empty()));

            if let Some(title_str) = title {
                html_config = html_config.with_title(title_str);
            } else if let Some(name) = input.file_name() {
                html_config = html_config.with_title(name.to_string_lossy());
            }

            let args = RenderArgs {
                input,
                output_html,
                output_json: json,
                html_config,
                parse_options: parse_options(lenient),
                print_summary: summary,
                summary_lines,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Validate { input, lenient } => {
            validate_trace_file(&input, &parse_options(lenient))?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
