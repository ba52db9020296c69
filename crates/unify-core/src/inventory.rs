//! Field inventory: the first pass over a corpus.
//!
//! Collects every field name seen across all records in first-appearance
//! order, along with how many records carried each field. Items that failed
//! to decode upstream are counted and skipped; one bad line never stops the
//! scan.

use crate::types::RawRecord;
use std::borrow::Borrow;
use std::collections::HashMap;

/// The ordered set of field names observed across a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldVocabulary {
    names: Vec<String>,
}

impl FieldVocabulary {
    /// Field names in the order they were first seen.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names sorted lexicographically, for reporting.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for FieldVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in iter {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names }
    }
}

/// Accumulates the vocabulary plus per-field record counts.
#[derive(Debug, Clone, Default)]
pub struct FieldInventory {
    vocabulary: FieldVocabulary,
    counts: HashMap<String, usize>,
    records: usize,
    skipped: usize,
}

impl FieldInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a (possibly lazy) sequence of decode results. `Err` items are
    /// counted as skipped and otherwise ignored.
    pub fn scan<I, R, E>(items: I) -> Self
    where
        I: IntoIterator<Item = Result<R, E>>,
        R: Borrow<RawRecord>,
    {
        let mut inventory = Self::new();
        for item in items {
            match item {
                Ok(record) => inventory.observe(record.borrow()),
                Err(_) => inventory.skip(),
            }
        }
        tracing::info!(
            fields = inventory.vocabulary.len(),
            records = inventory.records,
            skipped = inventory.skipped,
            "field inventory complete"
        );
        inventory
    }

    /// Build from records that are already known to be decoded.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        Self::scan(records.into_iter().map(Ok::<_, std::convert::Infallible>))
    }

    pub fn observe(&mut self, record: &RawRecord) {
        self.records += 1;
        for key in record.keys() {
            match self.counts.get_mut(key) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(key.clone(), 1);
                    self.vocabulary.names.push(key.clone());
                }
            }
        }
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn vocabulary(&self) -> &FieldVocabulary {
        &self.vocabulary
    }

    pub fn into_vocabulary(self) -> FieldVocabulary {
        self.vocabulary
    }

    /// Number of records that carried `field`.
    pub fn count(&self, field: &str) -> usize {
        self.counts.get(field).copied().unwrap_or(0)
    }

    /// Field frequencies, most common first; ties broken by name.
    pub fn frequencies(&self) -> Vec<(&str, usize)> {
        let mut freqs: Vec<(&str, usize)> = self
            .vocabulary
            .names
            .iter()
            .map(|name| (name.as_str(), self.count(name)))
            .collect();
        freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        freqs
    }

    /// Records successfully observed.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Items skipped because they never decoded.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
