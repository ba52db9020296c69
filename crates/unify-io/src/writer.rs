//! Result writers.
//!
//! Unified events and rejections go to separate JSON array files; the tagged
//! outcome stream goes out as JSON lines. Serialization format is decided
//! here, never in the core.

use crate::WriteError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use unify_core::{MappingOutcome, Rejection, UnifiedEvent};

fn write_json_array<T: Serialize>(path: &Path, items: &[T], pretty: bool) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut out, items)?;
    } else {
        serde_json::to_writer(&mut out, items)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Write all unified events as one JSON array.
pub fn write_unified(path: &Path, events: &[&UnifiedEvent], pretty: bool) -> Result<(), WriteError> {
    write_json_array(path, events, pretty)?;
    tracing::info!(path = %path.display(), count = events.len(), "wrote unified events");
    Ok(())
}

/// Write rejections as one JSON array. Nothing is written, and `false` is
/// returned, when there are none.
pub fn write_rejected(path: &Path, rejections: &[&Rejection], pretty: bool) -> Result<bool, WriteError> {
    if rejections.is_empty() {
        return Ok(false);
    }
    write_json_array(path, rejections, pretty)?;
    tracing::info!(path = %path.display(), count = rejections.len(), "wrote rejected records");
    Ok(true)
}

/// Stream tagged outcomes, one compact JSON object per line.
pub fn write_outcomes_jsonl<W: Write>(mut out: W, outcomes: &[MappingOutcome]) -> Result<(), WriteError> {
    for outcome in outcomes {
        serde_json::to_writer(&mut out, outcome)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
