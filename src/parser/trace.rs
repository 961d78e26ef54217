//! Trace assembly: header plus the ordered feed of body lines.
//!
//! The assembler owns the id -> call table. Body lines are applied strictly
//! in order and a bad line never stops the parse.

use super::header::{parse_header, HeaderPolicy, TraceHeader};
use super::record::{apply_record, split_fields, RecordKind};
use super::schema::{CallId, CallRecord, Trace};
use crate::utils::config::HEADER_LINES;
use crate::utils::error::{HeaderError, RecordError};
use log::{debug, info};
use std::collections::{BTreeMap, HashMap};

/// Options controlling a parse
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub header_policy: HeaderPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }
}

/// Line-level diagnostics collected while assembling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Body lines fed to the assembler
    pub lines: usize,
    /// Lines applied as enter, exit or return records
    pub records: usize,
    /// Lines dropped as malformed
    pub malformed_lines: usize,
    /// Records applied out of the enter -> exit -> return order
    pub out_of_order: usize,
}

impl ParseStats {
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Records: {} | Malformed: {} | Out of order: {}",
            self.lines, self.records, self.malformed_lines, self.out_of_order
        )
    }
}

/// Accumulates body lines into a call table
#[derive(Debug, Default)]
pub struct TraceAssembler {
    calls: BTreeMap<CallId, CallRecord>,
    last_kind: HashMap<CallId, RecordKind>,
    stats: ParseStats,
}

impl TraceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and apply one line, returning the call as stored
    ///
    /// **Public** - strict per-line entry point; `feed_line` absorbs errors
    pub fn parse_line(&mut self, line: &str) -> Result<CallRecord, RecordError> {
        let fields = split_fields(line);
        let applied = apply_record(&mut self.calls, &fields)?;

        if !self.is_canonical(applied.id, applied.kind) {
            self.stats.out_of_order += 1;
            debug!(
                "{} record for call {} out of enter/exit/return order",
                applied.kind.label(),
                applied.id
            );
        }
        self.last_kind.insert(applied.id, applied.kind);

        Ok(applied.call)
    }

    /// Apply one body line, logging and skipping it when malformed
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines += 1;
        match self.parse_line(line) {
            Ok(_) => self.stats.records += 1,
            Err(e) => {
                self.stats.malformed_lines += 1;
                debug!("Skipping line {}: {}", self.stats.lines, e);
            }
        }
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn calls(&self) -> &BTreeMap<CallId, CallRecord> {
        &self.calls
    }

    pub fn finish(self, header: TraceHeader) -> Trace {
        Trace {
            version: header.version,
            format: header.format,
            start_time: header.start_time,
            calls: self.calls,
        }
    }

    /// Whether `kind` may follow the last record seen for `id`
    ///
    /// Enter may start any call; an id can be reused once its call is done.
    /// Exit must follow an enter. Return must follow an exit.
    fn is_canonical(&self, id: CallId, kind: RecordKind) -> bool {
        let last = self.last_kind.get(&id).copied();
        match kind {
            RecordKind::Enter => true,
            RecordKind::Exit => last == Some(RecordKind::Enter),
            RecordKind::Return => last == Some(RecordKind::Exit),
        }
    }
}

/// Parse a whole trace given as lines
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `HeaderError` - header lines missing or malformed (see `HeaderPolicy`)
///
/// Body lines never cause an error.
pub fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    options: &ParseOptions,
) -> Result<Trace, HeaderError> {
    parse_lines_with_stats(lines, options).map(|(trace, _)| trace)
}

/// Like `parse_lines`, also returning the line diagnostics
pub fn parse_lines_with_stats<S: AsRef<str>>(
    lines: &[S],
    options: &ParseOptions,
) -> Result<(Trace, ParseStats), HeaderError> {
    let header = parse_header(lines, options.header_policy)?;

    let mut assembler = TraceAssembler::new();
    for line in &lines[HEADER_LINES..] {
        assembler.feed_line(line.as_ref());
    }

    let stats = assembler.stats();
    info!("Parsed trace: {}", stats.summary());

    let trace = assembler.finish(header);
    debug!("Assembled {} calls", trace.len());

    Ok((trace, stats))
}

/// Parse a whole trace given as text
pub fn parse_content(content: &str, options: &ParseOptions) -> Result<Trace, HeaderError> {
    let lines: Vec<&str> = content.lines().collect();
    parse_lines(&lines, options)
}
