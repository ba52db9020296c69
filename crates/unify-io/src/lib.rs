//! unify-io — the collaborators around the unify core.
//!
//! The core never touches files. This crate reads JSON-lines input into
//! [`unify_core::RawRecord`]s, writes the mapping results back out, and
//! renders the end-of-run report.

pub mod loader;
pub mod report;
pub mod writer;

pub use loader::{JsonlLoader, LoadedRecord};
pub use report::Report;

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or decode an input line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open input '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: read failed: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: bad JSON: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: JSON value is not an object")]
    NotAnObject { line: usize },
}

/// Failure to persist mapping results.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
