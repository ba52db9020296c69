//! Two-phase pipeline driver.
//!
//! ```text
//! phase 1: records ──► FieldInventory ──► FieldCategories (frozen)
//!                                                │
//! phase 2: records ──► SchemaMapper (per record) ◄┘ ──► Vec<MappingOutcome>
//! ```
//!
//! Phase 1 always finishes before phase 2 starts. Phase 2 is either a plain
//! loop or a rayon `par_iter`; both return outcomes in input order, one per
//! record.

use crate::categorizer::FieldCategories;
use crate::config::MappingConfig;
use crate::inventory::FieldInventory;
use crate::mapper::SchemaMapper;
use crate::types::{MappingOutcome, RawRecord, Rejection, UnifiedEvent};
use rayon::prelude::*;

/// A decoded record and its 1-based input line.
pub type NumberedRecord = (usize, RawRecord);

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub inventory: FieldInventory,
    pub categories: FieldCategories,
    /// One outcome per input record, ordered by line.
    pub outcomes: Vec<MappingOutcome>,
}

impl PipelineOutput {
    pub fn unified(&self) -> impl Iterator<Item = &UnifiedEvent> {
        self.outcomes.iter().filter_map(MappingOutcome::as_unified)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Rejection> {
        self.outcomes.iter().filter_map(MappingOutcome::as_rejected)
    }

    pub fn summary(&self) -> Summary {
        let unified = self.outcomes.iter().filter(|o| o.is_unified()).count();
        Summary {
            unified,
            rejected: self.outcomes.len() - unified,
            skipped: self.inventory.skipped(),
            fields: self.inventory.vocabulary().len(),
        }
    }
}

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub unified: usize,
    pub rejected: usize,
    /// Items that never decoded and so never reached the mapper.
    pub skipped: usize,
    pub fields: usize,
}

impl Summary {
    pub fn mapped(&self) -> usize {
        self.unified + self.rejected
    }

    /// Percentage of mapped records that were unified; `0.0` for an empty run.
    pub fn success_rate(&self) -> f64 {
        match self.mapped() {
            0 => 0.0,
            n => self.unified as f64 / n as f64 * 100.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: MappingConfig,
}

impl Pipeline {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Run both phases over already-decoded records.
    pub fn run(&self, records: &[NumberedRecord]) -> PipelineOutput {
        let inventory = FieldInventory::from_records(records.iter().map(|(_, r)| r));
        self.run_with_inventory(inventory, records)
    }

    /// Run phase 2 with an inventory built elsewhere, e.g. one that also
    /// counted decode failures while the input was loaded.
    pub fn run_with_inventory(
        &self,
        inventory: FieldInventory,
        records: &[NumberedRecord],
    ) -> PipelineOutput {
        let categories = FieldCategories::categorize(inventory.vocabulary());
        let outcomes = self.map_all(&categories, records);
        tracing::info!(
            records = records.len(),
            unified = outcomes.iter().filter(|o| o.is_unified()).count(),
            parallel = self.config.parallel,
            "mapping complete"
        );
        PipelineOutput {
            inventory,
            categories,
            outcomes,
        }
    }

    /// Phase 2 only: map every record against frozen categories.
    pub fn map_all(
        &self,
        categories: &FieldCategories,
        records: &[NumberedRecord],
    ) -> Vec<MappingOutcome> {
        let mapper = SchemaMapper::new(categories, self.config.rejected_payload);
        if self.config.parallel {
            map_parallel(&mapper, records)
        } else {
            map_sequential(&mapper, records)
        }
    }
}

fn map_sequential(mapper: &SchemaMapper<'_>, records: &[NumberedRecord]) -> Vec<MappingOutcome> {
    records
        .iter()
        .map(|(line, record)| mapper.map(record, *line))
        .collect()
}

fn map_parallel(mapper: &SchemaMapper<'_>, records: &[NumberedRecord]) -> Vec<MappingOutcome> {
    // Indexed collect: outcomes come back in input order.
    records
        .par_iter()
        .map(|(line, record)| mapper.map(record, *line))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
