//! Source classification from record shape. Always yields a value.

use super::{has_error_field, has_field, Extractor};
use crate::types::{RawRecord, Source};

static PAYMENT_FIELDS: phf::Set<&'static str> = phf::phf_set! {
    "transaction_id",
    "payment_method",
    "payment_id",
    "order_details",
};

static STACK_TRACE_FIELDS: phf::Set<&'static str> = phf::phf_set! {
    "stack_trace",
    "stacktrace",
};

/// A rule mapping a record shape to a source.
pub struct SourceRule {
    pub matches: fn(&RawRecord) -> bool,
    pub source: Source,
}

/// Rules in priority order; records matching none are [`Source::Internal`].
pub const RULES: &[SourceRule] = &[
    SourceRule {
        matches: has_payment_fields,
        source: Source::Vendor,
    },
    SourceRule {
        matches: has_error_with_stack_trace,
        source: Source::Device,
    },
];

fn has_payment_fields(record: &RawRecord) -> bool {
    has_field(record, &PAYMENT_FIELDS)
}

fn has_error_with_stack_trace(record: &RawRecord) -> bool {
    has_error_field(record) && has_field(record, &STACK_TRACE_FIELDS)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceExtractor;

impl SourceExtractor {
    pub fn classify(&self, record: &RawRecord) -> Source {
        RULES
            .iter()
            .find(|rule| (rule.matches)(record))
            .map_or(Source::Internal, |rule| rule.source)
    }
}

impl Extractor for SourceExtractor {
    type Output = Source;

    /// Candidates are ignored; the whole record is inspected.
    fn extract(&self, record: &RawRecord, _candidates: &[String]) -> Option<Source> {
        Some(self.classify(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    #[case::payment(json!({"payment_method": "card"}), Source::Vendor)]
    #[case::transaction(json!({"Transaction_Id": "t-1"}), Source::Vendor)]
    #[case::payment_beats_device(json!({"order_details": {}, "error": "x", "stack_trace": "y"}), Source::Vendor)]
    #[case::device(json!({"error": "x", "stack_trace": "y"}), Source::Device)]
    #[case::null_error_with_trace(json!({"error": null, "stack_trace": "y"}), Source::Device)]
    #[case::error_alone(json!({"error": "x"}), Source::Internal)]
    #[case::trace_alone(json!({"stacktrace": "y"}), Source::Internal)]
    #[case::neither(json!({"message": "hi"}), Source::Internal)]
    fn classifies_by_shape(#[case] record: Value, #[case] expected: Source) {
        let record = record.as_object().unwrap();
        assert_eq!(SourceExtractor.classify(record), expected);
        assert_eq!(SourceExtractor.extract(record, &[]), Some(expected));
    }
}
