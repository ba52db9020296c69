//! Event type extraction.
//!
//! Named candidates come first: any non-trivial value wins, coerced to a
//! string. When no candidate qualifies, [`INFERENCES`] is consulted in order
//! against the whole record. Indicator fields such as `is_login` are never
//! EVENT_TYPE candidates themselves, so they only matter here.

use super::{
    coerce_to_string, find_field, first_candidate, has_error_field, is_trivial, is_truthy,
    Extractor,
};
use crate::types::RawRecord;

static LOGIN_FIELDS: phf::Set<&'static str> = phf::phf_set! {
    "login_event",
    "is_login",
    "login",
};

static TRANSACTION_TYPE_FIELDS: phf::Set<&'static str> = phf::phf_set! {
    "transaction_type",
    "txn_type",
};

/// A structural rule: when `applies` holds for the record, `infer` names the
/// event type.
pub struct Inference {
    pub name: &'static str,
    pub applies: fn(&RawRecord) -> bool,
    pub infer: fn(&RawRecord) -> Option<String>,
}

/// Structural rules, highest priority first.
pub const INFERENCES: &[Inference] = &[
    Inference {
        name: "login",
        applies: has_truthy_login,
        infer: infer_login,
    },
    Inference {
        name: "error",
        applies: has_error_field,
        infer: infer_error,
    },
    Inference {
        name: "transaction_type",
        applies: has_transaction_type,
        infer: transaction_type_value,
    },
];

fn infer_login(_: &RawRecord) -> Option<String> {
    Some("login".to_string())
}

fn infer_error(_: &RawRecord) -> Option<String> {
    Some("error".to_string())
}

fn has_truthy_login(record: &RawRecord) -> bool {
    record
        .iter()
        .any(|(key, value)| LOGIN_FIELDS.contains(key.to_lowercase().as_str()) && is_truthy(value))
}

fn has_transaction_type(record: &RawRecord) -> bool {
    find_field(record, &TRANSACTION_TYPE_FIELDS).is_some_and(|(_, value)| !is_trivial(value))
}

fn transaction_type_value(record: &RawRecord) -> Option<String> {
    find_field(record, &TRANSACTION_TYPE_FIELDS).and_then(|(_, value)| coerce_to_string(value))
}

/// Run the structural rules alone.
pub fn infer(record: &RawRecord) -> Option<String> {
    INFERENCES
        .iter()
        .filter(|rule| (rule.applies)(record))
        .find_map(|rule| {
            let inferred = (rule.infer)(record);
            tracing::trace!(rule = rule.name, ?inferred, "event type inferred from structure");
            inferred
        })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventTypeExtractor;

impl Extractor for EventTypeExtractor {
    type Output = String;

    fn extract(&self, record: &RawRecord, candidates: &[String]) -> Option<String> {
        first_candidate(record, candidates, coerce_to_string).or_else(|| infer(record))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
