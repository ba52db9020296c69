//! unify — map schema-less event records onto one canonical event shape.
//!
//! This crate ties the workspace members together so that integration tests
//! and benchmarks can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! JsonlLoader ──► FieldInventory ──► FieldCategories ──► SchemaMapper ──► writers / Report
//!  (unify-io)          └──────────── unify-core ────────────────┘          (unify-io)
//! ```

pub use unify_core;
pub use unify_io;

pub use unify_core::{
    Category, Config, FieldCategories, FieldInventory, MappingOutcome, Pipeline, PipelineOutput,
    RawRecord, Rejection, SchemaMapper, Source, UnifiedEvent,
};

use std::path::Path;
use unify_io::{JsonlLoader, LoadError};

/// Load a JSON-lines file and run both pipeline phases over it.
///
/// Undecodable lines are counted by the inventory and never reach the
/// mapper. Only a failure to open the file is an error.
pub fn unify_file(path: &Path, config: &unify_core::MappingConfig) -> Result<PipelineOutput, LoadError> {
    let loaded: Vec<_> = JsonlLoader::open(path)?.collect();
    let inventory = FieldInventory::scan(loaded.iter().map(|item| item.as_ref().map(|l| &l.record)));
    let records: Vec<_> = loaded
        .into_iter()
        .filter_map(Result::ok)
        .map(unify_io::LoadedRecord::into_numbered)
        .collect();
    Ok(Pipeline::new(config.clone()).run_with_inventory(inventory, &records))
}
