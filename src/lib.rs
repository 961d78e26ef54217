//! Xdebug Trace Tree
//!
//! Reconstructs the call tree recorded in an Xdebug function trace
//! (computerized format) and renders it as a nested HTML document.
//!
//! This crate provides the core implementation for the
//! `xdebug-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! xdebug-trace render -i /tmp/trace.xt
//! xdebug-trace validate -i /tmp/trace.xt
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use xdebug_trace_tree::parser::{parse_content, ParseOptions};
//!
//! let trace = parse_content(&text, &ParseOptions::new())?;
//! for (id, call) in trace.calls_in_order() {
//!     println!("{} {} {}", id, call.name, call.time_diff);
//! }
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod render;
pub mod source;
pub mod utils;
