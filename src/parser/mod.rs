//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Tolerant decoding of numeric fields
//! - Parsing the version, file format and start time header
//! - Interpreting enter/exit/return record lines
//! - Assembling records into a call table keyed by id

pub mod header;
pub mod record;
pub mod scalar;
pub mod schema;
pub mod trace;

// Re-export main types
pub use header::{
    parse_format, parse_header, parse_start_time, parse_version, HeaderPolicy, TraceHeader,
};
pub use record::{apply_record, split_fields, AppliedRecord, RecordKind};
pub use scalar::{decode_float, decode_int, decode_int64};
pub use schema::{CallId, CallRecord, Trace};
pub use trace::{
    parse_content, parse_lines, parse_lines_with_stats, ParseOptions, ParseStats, TraceAssembler,
};
