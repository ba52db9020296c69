//! Test builders: ergonomic constructors for records and corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::Value;
use unify::RawRecord;
use unify_core::NumberedRecord;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] fixtures. Fields keep insertion order.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("id", "abc")
///     .field("timestamp", 1722506400)
///     .field("action", "click")
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    fields: RawRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RawRecord {
        self.fields
    }
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Decode a JSON line into a record, panicking on anything but an object.
pub fn record_from_json(line: &str) -> RawRecord {
    match serde_json::from_str(line).expect("fixture must be valid JSON") {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// Number a slice of JSON lines from 1, the way the loader would.
pub fn numbered<S: AsRef<str>>(lines: &[S]) -> Vec<NumberedRecord> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, record_from_json(line.as_ref())))
        .collect()
}

/// Number already-built records from 1.
pub fn numbered_records(records: Vec<RawRecord>) -> Vec<NumberedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| (i + 1, record))
        .collect()
}
