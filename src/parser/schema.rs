//! Data model for a parsed trace.
//!
//! A `Trace` is a flat table of call records keyed by the record number
//! Xdebug writes in the second column. Tree structure is not stored; it is
//! derived from each record's `depth` when the calls are walked in id order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record number correlating the enter, exit and return lines of a call
pub type CallId = i64;

/// Top-level parse result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Xdebug version from the header (e.g. "2.4.0")
    pub version: String,

    /// Trace file column layout
    pub format: i64,

    /// Timestamp from the `TRACE START [...]` line
    pub start_time: NaiveDateTime,

    /// Calls by record number. Last write wins for a reused id.
    pub calls: BTreeMap<CallId, CallRecord>,
}

impl Trace {
    /// Calls in ascending id order, the order the renderer walks them in
    pub fn calls_in_order(&self) -> impl Iterator<Item = (CallId, &CallRecord)> {
        self.calls.iter().map(|(id, call)| (*id, call))
    }

    pub fn call(&self, id: CallId) -> Option<&CallRecord> {
        self.calls.get(&id)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Deepest nesting level seen in the trace
    pub fn max_depth(&self) -> i32 {
        self.calls.values().map(|c| c.depth).max().unwrap_or(0)
    }
}

/// One function invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Nesting level, 0 for the root
    pub depth: i32,

    pub time_enter: f64,
    pub time_exit: f64,
    /// `time_exit - time_enter`, zero until an exit record is seen
    pub time_diff: f64,

    pub memory_enter: i64,
    pub memory_exit: i64,
    /// `memory_exit - memory_enter`, zero until an exit record is seen
    pub memory_diff: i64,

    /// Function or construct name, e.g. `{main}` or `require_once`
    pub name: String,

    /// "1" for internal PHP functions, "0" for user-defined ones
    pub internal: String,

    pub file: String,
    pub line: String,

    /// Argument representations, or the single include/eval filename
    pub params: Vec<String>,

    /// Return value, present only when a return record was seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ret: Option<String>,
}

impl CallRecord {
    pub fn is_internal(&self) -> bool {
        self.internal == "1"
    }

    /// `file:line` of the call site
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    pub fn params_joined(&self, separator: &str) -> String {
        self.params.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_record_accessors() {
        let call = CallRecord {
            name: "define".to_string(),
            internal: "1".to_string(),
            file: "./index.php".to_string(),
            line: "20".to_string(),
            params: vec!["'ENVIRONMENT'".to_string(), "'production'".to_string()],
            ..Default::default()
        };

        assert!(call.is_internal());
        assert_eq!(call.location(), "./index.php:20");
        assert_eq!(call.params_joined(", "), "'ENVIRONMENT', 'production'");
    }

    #[test]
    fn test_default_record_is_user_code() {
        assert!(!CallRecord::default().is_internal());
        assert!(CallRecord::default().ret.is_none());
    }
}
