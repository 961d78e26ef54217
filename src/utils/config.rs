//! Configuration and constants for the trace parser and renderer.

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Header layout: version, file format, ignored line, TRACE START
pub const HEADER_LINES: usize = 4;
pub const VERSION_LINE: usize = 0;
pub const FORMAT_LINE: usize = 1;
pub const START_LINE: usize = 3;

pub const VERSION_PREFIX: &str = "Version: ";
pub const FORMAT_PREFIX: &str = "File format: ";
pub const START_PREFIX: &str = "TRACE START [";

/// Layout of the timestamp inside `TRACE START [...]`
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Width of a rendered `YYYY-MM-DD HH:MM:SS` timestamp
pub const START_TIME_WIDTH: usize = 19;

// Record field positions (tab separated)
pub const FIELD_SEPARATOR: char = '\t';
pub const FIELD_DEPTH: usize = 0;
pub const FIELD_ID: usize = 1;
pub const FIELD_KIND: usize = 2;
pub const FIELD_TIME: usize = 3;
pub const FIELD_MEMORY: usize = 4;
pub const FIELD_NAME: usize = 5;
pub const FIELD_RETURN: usize = 5;
pub const FIELD_INTERNAL: usize = 6;
pub const FIELD_INCLUDE: usize = 7;
pub const FIELD_FILE: usize = 8;
pub const FIELD_LINE: usize = 9;
pub const FIELD_FIRST_PARAM: usize = 11;

/// Below this every line is malformed, whatever its kind
pub const MIN_RECORD_FIELDS: usize = 5;
pub const MIN_ENTER_FIELDS: usize = FIELD_LINE + 1;
pub const MIN_RETURN_FIELDS: usize = FIELD_RETURN + 1;
/// Params are read from the tail only when the line reaches this length
pub const MIN_PARAM_TAIL_FIELDS: usize = FIELD_FIRST_PARAM + 1;

// Renderer defaults
/// Deepest nesting emitted by the renderers; deeper calls are drawn at this level
pub const MAX_RENDER_DEPTH: i32 = 256;
pub const DEFAULT_STYLESHEET: &str = "style.css";
pub const DEFAULT_SCRIPT: &str = "script.js";
pub const DEFAULT_TITLE: &str = "Xdebug Trace";
pub const PARAM_SEPARATOR: &str = ", ";
