//! Extractors, one strategy per canonical attribute.
//!
//! Every extractor follows the same contract: walk the candidate fields in
//! priority order and return the first value its rules accept, or `None`.
//! The rules themselves are small ordered tables of (predicate, transform)
//! pairs so each one can be tested on its own.

pub mod event_type;
pub mod id;
pub mod source;
pub mod timestamp;
pub mod user;

pub use event_type::EventTypeExtractor;
pub use id::IdExtractor;
pub use source::SourceExtractor;
pub use timestamp::TimestampExtractor;
pub use user::UserExtractor;

use crate::types::RawRecord;
use serde_json::Value;

/// Turns a record plus its candidate fields into an optional normalised value.
pub trait Extractor {
    type Output;

    fn extract(&self, record: &RawRecord, candidates: &[String]) -> Option<Self::Output>;
}

/// A value carries no information: null, an empty container, or a string
/// that is blank once trimmed.
pub fn is_trivial(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Loose truthiness used by structural indicator fields.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && !matches!(s.to_ascii_lowercase().as_str(), "false" | "0" | "no")
        }
        other => !is_trivial(other),
    }
}

/// Coerce a non-trivial value to its string form. Strings are returned as
/// written; everything else uses its compact JSON rendering.
pub fn coerce_to_string(value: &Value) -> Option<String> {
    if is_trivial(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Walk `candidates` in order and return the first transform that succeeds.
/// Candidates missing from the record or holding trivial values are skipped
/// before `transform` is consulted.
pub fn first_candidate<'r, T, F>(record: &'r RawRecord, candidates: &[String], mut transform: F) -> Option<T>
where
    F: FnMut(&'r Value) -> Option<T>,
{
    candidates
        .iter()
        .filter_map(|name| record.get(name))
        .filter(|value| !is_trivial(value))
        .find_map(|value| transform(value))
}

/// Find the first record key whose lower-cased form is in `names`.
pub fn find_field<'r>(record: &'r RawRecord, names: &phf::Set<&'static str>) -> Option<(&'r str, &'r Value)> {
    record
        .iter()
        .find(|(key, _)| names.contains(key.to_lowercase().as_str()))
        .map(|(key, value)| (key.as_str(), value))
}

/// Whether any record key (case-insensitively) is in `names`.
pub fn has_field(record: &RawRecord, names: &phf::Set<&'static str>) -> bool {
    find_field(record, names).is_some()
}

static ERROR_FIELDS: phf::Set<&'static str> = phf::phf_set! {
    "error",
};

/// Whether the record carries an error indicator. Key presence alone counts,
/// whatever the value; event type inference and source classification both
/// go through here.
pub fn has_error_field(record: &RawRecord) -> bool {
    has_field(record, &ERROR_FIELDS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
