//! JSON-lines loader.
//!
//! Reads one record per line, lazily. Blank lines are skipped outright; lines
//! that are not JSON objects come back as [`LoadError`]s so the caller can
//! count them without aborting the read.

use crate::LoadError;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use unify_core::{NumberedRecord, RawRecord};

/// A decoded record and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    pub line: usize,
    pub record: RawRecord,
}

impl LoadedRecord {
    pub fn into_numbered(self) -> NumberedRecord {
        (self.line, self.record)
    }
}

/// Iterator over the records of a JSON-lines source.
pub struct JsonlLoader<R> {
    lines: Lines<R>,
    line: usize,
}

impl JsonlLoader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

/// Decode a single line into a record.
pub fn decode_line(text: &str, line: usize) -> Result<RawRecord, LoadError> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Object(record)) => Ok(record),
        Ok(_) => Err(LoadError::NotAnObject { line }),
        Err(source) => Err(LoadError::Decode { line, source }),
    }
}

impl<R: BufRead> Iterator for JsonlLoader<R> {
    type Item = Result<LoadedRecord, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let line = self.line;
            let text = match text {
                Ok(text) => text,
                Err(source) => return Some(Err(LoadError::Read { line, source })),
            };
            if text.trim().is_empty() {
                continue;
            }
            let decoded = decode_line(text.trim(), line).map(|record| LoadedRecord { line, record });
            if let Err(err) = &decoded {
                tracing::warn!(line, error = %err, "skipping undecodable line");
            }
            return Some(decoded);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
