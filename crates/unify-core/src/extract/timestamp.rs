//! Timestamp extraction and normalisation.
//!
//! Each candidate value is matched against [`FORMATS`] in order; the first
//! format whose detector accepts the value decides how it is parsed. A value
//! no format detects, or that its format fails to parse, disqualifies only
//! that candidate and the next one is tried.
//!
//! | Order | Detector | Interpretation |
//! |-------|----------|----------------|
//! | 1 | string containing `T` | ISO-8601 / RFC 3339, seconds optional, naive values read as UTC |
//! | 2 | number, magnitude > 1e12 | epoch milliseconds |
//! | 3 | number, magnitude > 1e9 | epoch seconds |
//! | 4 | string `YYYY-MM-DD HH:MM:SS` | UTC wall-clock time |

use super::{first_candidate, Extractor};
use crate::types::RawRecord;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;
const EPOCH_SECONDS_THRESHOLD: f64 = 1e9;

/// One recognised timestamp encoding.
pub struct TimestampFormat {
    pub name: &'static str,
    pub detect: fn(&Value) -> bool,
    pub parse: fn(&Value) -> Option<DateTime<Utc>>,
}

/// Recognised encodings, in precedence order.
pub const FORMATS: &[TimestampFormat] = &[
    TimestampFormat {
        name: "iso8601",
        detect: is_iso_like,
        parse: parse_iso,
    },
    TimestampFormat {
        name: "epoch_millis",
        detect: is_epoch_millis,
        parse: parse_epoch_millis,
    },
    TimestampFormat {
        name: "epoch_seconds",
        detect: is_epoch_seconds,
        parse: parse_epoch_seconds,
    },
    TimestampFormat {
        name: "space_separated",
        detect: is_space_separated,
        parse: parse_space_separated,
    },
];

fn space_separated_re() -> &'static Regex {
    static SPACE_SEPARATED_RE: OnceLock<Regex> = OnceLock::new();
    SPACE_SEPARATED_RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid timestamp regex")
    })
}

fn is_iso_like(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.contains('T'))
}

/// Offset-carrying ISO-8601 layouts tried after RFC 3339, seconds optional.
const ISO_OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Layouts without an offset; a trailing `Z` is stripped before these run.
const ISO_NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_iso(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = ISO_OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(s, layout).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = s.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'z')).unwrap_or(s);
    ISO_NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(naive, layout).ok())
        .map(|naive| naive.and_utc())
}

fn number_magnitude(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite()).map(f64::abs)
}

fn is_epoch_millis(value: &Value) -> bool {
    number_magnitude(value).is_some_and(|m| m > EPOCH_MILLIS_THRESHOLD)
}

fn is_epoch_seconds(value: &Value) -> bool {
    number_magnitude(value).is_some_and(|m| m > EPOCH_SECONDS_THRESHOLD)
}

fn from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis.round() as i64).single()
}

fn parse_epoch_millis(value: &Value) -> Option<DateTime<Utc>> {
    from_millis(value.as_f64()?)
}

fn parse_epoch_seconds(value: &Value) -> Option<DateTime<Utc>> {
    from_millis(value.as_f64()? * 1000.0)
}

fn is_space_separated(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| space_separated_re().is_match(s.trim()))
}

fn parse_space_separated(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Normalise a single value, or `None` if no format understands it.
pub fn normalize(value: &Value) -> Option<DateTime<Utc>> {
    let format = FORMATS.iter().find(|f| (f.detect)(value))?;
    let parsed = (format.parse)(value);
    if parsed.is_none() {
        tracing::trace!(format = format.name, %value, "timestamp candidate failed to parse");
    }
    parsed
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampExtractor;

impl Extractor for TimestampExtractor {
    type Output = DateTime<Utc>;

    fn extract(&self, record: &RawRecord, candidates: &[String]) -> Option<DateTime<Utc>> {
        first_candidate(record, candidates, normalize)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
