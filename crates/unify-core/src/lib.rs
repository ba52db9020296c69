//! unify-core — field classification and schema mapping for unify.
//!
//! Turns schema-less event records into one canonical [`UnifiedEvent`]
//! shape without any upfront contract from the producers.
//!
//! # Architecture
//!
//! ```text
//! records ──► FieldInventory ──► FieldCategories ──► SchemaMapper ──► MappingOutcome
//!                                                        │
//!                                        Id / Timestamp / User / EventType / Source
//!                                                    extractors
//! ```
//!
//! Categories are computed once per corpus and passed explicitly into the
//! mapper. Mapping is pure per record, so phase 2 may run on the rayon pool.

pub mod categorizer;
pub mod config;
pub mod error;
pub mod extract;
pub mod inventory;
pub mod mapper;
pub mod pipeline;
pub mod types;

pub use categorizer::{Category, FieldCategories};
pub use config::{Config, MappingConfig, RejectedPayload};
pub use error::UnifyError;
pub use inventory::{FieldInventory, FieldVocabulary};
pub use mapper::SchemaMapper;
pub use pipeline::{NumberedRecord, Pipeline, PipelineOutput, Summary};
pub use types::{format_utc, MappingOutcome, RawRecord, Rejection, Source, UnifiedEvent};
