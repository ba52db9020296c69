//! Identifier extraction.
//!
//! Exact primary names (`id`, `event_id`, `transaction_id`) outrank every
//! other id-like field. When nothing qualifies an id is synthesized from the
//! line number, so this extractor never leaves a record without an id.

use super::{coerce_to_string, first_candidate, Extractor};
use crate::categorizer::{Category, FieldCategories};
use crate::types::RawRecord;

/// Primary id field names, in rank order. Compared case-insensitively.
pub const PRIMARY_ID_FIELDS: [&str; 3] = ["id", "event_id", "transaction_id"];

/// Id for a record whose fields offered none. Distinct per line only; a real
/// field that happens to hold the same text is not detected.
pub fn synthesize_id(line: usize) -> String {
    format!("generated_{line}")
}

/// Order the id candidates: primaries by rank, then the remaining id fields
/// in vocabulary order.
pub fn rank_candidates(categories: &FieldCategories) -> Vec<String> {
    let fields = categories.get(Category::Id);
    let mut ranked: Vec<String> = Vec::with_capacity(fields.len());
    for primary in PRIMARY_ID_FIELDS {
        ranked.extend(
            fields
                .iter()
                .filter(|f| f.to_lowercase() == primary)
                .cloned(),
        );
    }
    ranked.extend(
        fields
            .iter()
            .filter(|f| !PRIMARY_ID_FIELDS.contains(&f.to_lowercase().as_str()))
            .cloned(),
    );
    ranked
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdExtractor;

impl IdExtractor {
    /// Extract the id, falling back to [`synthesize_id`]. `candidates` must
    /// already be ranked with [`rank_candidates`].
    pub fn resolve(&self, record: &RawRecord, candidates: &[String], line: usize) -> String {
        self.extract(record, candidates)
            .unwrap_or_else(|| synthesize_id(line))
    }
}

impl Extractor for IdExtractor {
    type Output = String;

    fn extract(&self, record: &RawRecord, candidates: &[String]) -> Option<String> {
        first_candidate(record, candidates, coerce_to_string)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
