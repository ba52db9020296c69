//! Schema mapper: turns one [`RawRecord`] into a [`MappingOutcome`].
//!
//! The mapper borrows the run's frozen [`FieldCategories`] and derives the
//! ranked id candidate list from it once, at construction. Mapping a record
//! is then a pure function of the record and its line number: no state is
//! written, so a single mapper can be shared across threads.
//!
//! A record is accepted iff both a timestamp and an event type were found.
//! The id never causes a rejection because it is synthesized when missing.

use crate::categorizer::{Category, FieldCategories};
use crate::config::RejectedPayload;
use crate::extract::{
    id, EventTypeExtractor, Extractor, IdExtractor, SourceExtractor, TimestampExtractor,
    UserExtractor,
};
use crate::types::{MappingOutcome, RawRecord, Rejection, UnifiedEvent};

pub const MISSING_TIMESTAMP: &str = "missing timestamp";
pub const MISSING_EVENT_TYPE: &str = "missing eventType";

#[derive(Debug, Clone)]
pub struct SchemaMapper<'c> {
    categories: &'c FieldCategories,
    id_candidates: Vec<String>,
    rejected_payload: RejectedPayload,
}

impl<'c> SchemaMapper<'c> {
    pub fn new(categories: &'c FieldCategories, rejected_payload: RejectedPayload) -> Self {
        Self {
            categories,
            id_candidates: id::rank_candidates(categories),
            rejected_payload,
        }
    }

    pub fn categories(&self) -> &FieldCategories {
        self.categories
    }

    /// Map a single record. `line` is the record's 1-based input line.
    pub fn map(&self, record: &RawRecord, line: usize) -> MappingOutcome {
        let timestamp =
            TimestampExtractor.extract(record, self.categories.get(Category::Timestamp));
        let event_type =
            EventTypeExtractor.extract(record, self.categories.get(Category::EventType));

        let (timestamp, event_type) = match (timestamp, event_type) {
            (Some(ts), Some(et)) => (ts, et),
            (timestamp, event_type) => {
                let mut reasons = Vec::with_capacity(2);
                if timestamp.is_none() {
                    reasons.push(MISSING_TIMESTAMP.to_string());
                }
                if event_type.is_none() {
                    reasons.push(MISSING_EVENT_TYPE.to_string());
                }
                tracing::debug!(line, ?reasons, "record rejected");
                let payload = match self.rejected_payload {
                    RejectedPayload::Retain => Some(record.clone()),
                    RejectedPayload::Drop => None,
                };
                return MappingOutcome::Rejected(Rejection {
                    line,
                    reasons,
                    payload,
                });
            }
        };

        let event = UnifiedEvent {
            id: IdExtractor.resolve(record, &self.id_candidates, line),
            timestamp,
            source: SourceExtractor.classify(record),
            event_type,
            payload: record.clone(),
            user_id: UserExtractor.extract(record, self.categories.get(Category::User)),
        };
        tracing::debug!(line, id = %event.id, event_type = %event.event_type, "record unified");
        MappingOutcome::Unified { line, event }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
