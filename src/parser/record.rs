//! Record line interpretation.
//!
//! Each body line of a trace is one of three record kinds, sharing the
//! record number in the second column:
//!
//! ```text
//! depth  id  0  time  memory  name  internal  include  file  line  nparams  params...
//! depth  id  1  time  memory
//! depth  id  R              return-value
//! ```
//!
//! Enter records open a call; exit and return records update whatever is
//! stored under the id, which may be nothing.

use super::scalar::{decode_float, decode_int, decode_int64};
use super::schema::{CallId, CallRecord};
use crate::utils::config::{
    FIELD_DEPTH, FIELD_FILE, FIELD_FIRST_PARAM, FIELD_ID, FIELD_INCLUDE, FIELD_INTERNAL,
    FIELD_KIND, FIELD_LINE, FIELD_MEMORY, FIELD_NAME, FIELD_RETURN, FIELD_SEPARATOR, FIELD_TIME,
    MIN_ENTER_FIELDS, MIN_PARAM_TAIL_FIELDS, MIN_RECORD_FIELDS, MIN_RETURN_FIELDS,
};
use crate::utils::error::RecordError;
use std::collections::BTreeMap;

/// Kind column of a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Enter,
    Exit,
    Return,
}

impl RecordKind {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "0" => Some(Self::Enter),
            "1" => Some(Self::Exit),
            "R" => Some(Self::Return),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Return => "return",
        }
    }

    fn min_fields(&self) -> usize {
        match self {
            Self::Enter => MIN_ENTER_FIELDS,
            Self::Exit => MIN_RECORD_FIELDS,
            Self::Return => MIN_RETURN_FIELDS,
        }
    }
}

/// A record after it has been applied to the call table
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedRecord {
    pub id: CallId,
    pub kind: RecordKind,
    /// The call as stored under `id` after the update
    pub call: CallRecord,
}

pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Apply one split record line to the call table
///
/// **Public** - used by the trace assembler for every body line
///
/// # Errors
/// * `RecordError::TooFewFields` - line too short for its kind
/// * `RecordError::UnknownKind` - kind column is not `0`, `1` or `R`
///
/// The table is untouched when an error is returned.
pub fn apply_record(
    calls: &mut BTreeMap<CallId, CallRecord>,
    fields: &[&str],
) -> Result<AppliedRecord, RecordError> {
    if fields.len() < MIN_RECORD_FIELDS {
        return Err(RecordError::TooFewFields {
            kind: "record",
            found: fields.len(),
            required: MIN_RECORD_FIELDS,
        });
    }

    let id = decode_int64(fields[FIELD_ID]);
    let kind = RecordKind::from_field(fields[FIELD_KIND])
        .ok_or_else(|| RecordError::UnknownKind(fields[FIELD_KIND].to_string()))?;

    if fields.len() < kind.min_fields() {
        return Err(RecordError::TooFewFields {
            kind: kind.label(),
            found: fields.len(),
            required: kind.min_fields(),
        });
    }

    let call = match kind {
        RecordKind::Enter => build_enter(fields),
        RecordKind::Exit => {
            let mut call = calls.get(&id).cloned().unwrap_or_default();
            call.time_exit = decode_float(fields[FIELD_TIME]);
            call.memory_exit = decode_int64(fields[FIELD_MEMORY]);
            call.time_diff = call.time_exit - call.time_enter;
            // Corrupted memory fields wrap instead of aborting the parse
            call.memory_diff = call.memory_exit.wrapping_sub(call.memory_enter);
            call
        }
        RecordKind::Return => {
            let mut call = calls.get(&id).cloned().unwrap_or_default();
            call.ret = Some(fields[FIELD_RETURN].to_string());
            call
        }
    };

    calls.insert(id, call.clone());

    Ok(AppliedRecord { id, kind, call })
}

/// Build a fresh call from an enter record
///
/// **Private** - caller has checked the field count
fn build_enter(fields: &[&str]) -> CallRecord {
    CallRecord {
        depth: decode_int(fields[FIELD_DEPTH]),
        time_enter: decode_float(fields[FIELD_TIME]),
        memory_enter: decode_int64(fields[FIELD_MEMORY]),
        name: fields[FIELD_NAME].to_string(),
        internal: fields[FIELD_INTERNAL].to_string(),
        file: fields[FIELD_FILE].to_string(),
        line: fields[FIELD_LINE].to_string(),
        params: parse_params(fields),
        ..Default::default()
    }
}

/// Params come from the include/eval column when it is set, otherwise
/// from the tail after the parameter count.
fn parse_params(fields: &[&str]) -> Vec<String> {
    if !fields[FIELD_INCLUDE].is_empty() {
        vec![fields[FIELD_INCLUDE].to_string()]
    } else if fields.len() >= MIN_PARAM_TAIL_FIELDS {
        fields[FIELD_FIRST_PARAM..]
            .iter()
            .map(|p| p.to_string())
            .collect()
    } else {
        Vec::new()
    }
}
