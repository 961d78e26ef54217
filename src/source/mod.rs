//! Trace input: reading a trace file into an ordered list of lines.

pub mod reader;

// Re-export main functions
pub use reader::{read_lines, read_trace_lines};
