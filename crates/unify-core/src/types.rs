//! Core types for unify-core.
//!
//! This module defines the data shared across the mapping layers: the
//! open-ended [`RawRecord`] input, the canonical [`UnifiedEvent`] output, the
//! [`Rejection`] emitted when a record cannot be mapped, and the tagged
//! [`MappingOutcome`] handed to writers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// One decoded input event. Keys keep their original insertion order, which
/// is what makes first-seen field ordering deterministic.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Where an event originated, inferred from the shape of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Internal,
    Vendor,
    Device,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Internal => write!(f, "internal"),
            Source::Vendor => write!(f, "vendor"),
            Source::Device => write!(f, "device"),
        }
    }
}

/// The canonical event shape every accepted record is mapped into.
///
/// Serializes with the exact field set `id`, `timestamp`, `source`,
/// `eventType`, `payload` and, only when a real user was found, `userId`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedEvent {
    /// Never empty; synthesized as `generated_<line>` when no id field exists.
    pub id: String,
    #[serde(serialize_with = "serialize_utc")]
    pub timestamp: DateTime<Utc>,
    pub source: Source,
    /// Never empty.
    pub event_type: String,
    /// The original record, untouched.
    pub payload: RawRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A record that failed the required-field gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    /// 1-based input line number.
    pub line: usize,
    /// One reason per missing required field, in a fixed order.
    pub reasons: Vec<String>,
    /// Present only when the run retains rejected payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<RawRecord>,
}

/// Result of mapping a single record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MappingOutcome {
    Unified {
        #[serde(skip)]
        line: usize,
        event: UnifiedEvent,
    },
    Rejected(Rejection),
}

impl MappingOutcome {
    /// Input line this outcome belongs to.
    pub fn line(&self) -> usize {
        match self {
            MappingOutcome::Unified { line, .. } => *line,
            MappingOutcome::Rejected(rejection) => rejection.line,
        }
    }

    pub fn as_unified(&self) -> Option<&UnifiedEvent> {
        match self {
            MappingOutcome::Unified { event, .. } => Some(event),
            MappingOutcome::Rejected(_) => None,
        }
    }

    pub fn as_rejected(&self) -> Option<&Rejection> {
        match self {
            MappingOutcome::Rejected(rejection) => Some(rejection),
            MappingOutcome::Unified { .. } => None,
        }
    }

    pub fn is_unified(&self) -> bool {
        matches!(self, MappingOutcome::Unified { .. })
    }
}

/// Render a UTC instant as ISO-8601 with a trailing `Z`. Fractional seconds
/// appear only when they are non-zero.
pub fn format_utc(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn serialize_utc<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_utc(ts))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
