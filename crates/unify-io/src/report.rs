//! Human-readable run report.

use std::fmt;
use unify_core::{PipelineOutput, Summary};

/// How many field frequencies to list before eliding the rest.
const TOP_FIELDS: usize = 20;

/// Snapshot of a finished run, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub summary: Summary,
    /// Unique field names, sorted.
    pub fields: Vec<String>,
    /// `(field, records carrying it)`, most common first.
    pub frequencies: Vec<(String, usize)>,
}

impl Report {
    pub fn from_output(output: &PipelineOutput) -> Self {
        Self {
            summary: output.summary(),
            fields: output
                .inventory
                .vocabulary()
                .sorted()
                .into_iter()
                .map(str::to_string)
                .collect(),
            frequencies: output
                .inventory
                .frequencies()
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} unique fields: {:?}", self.fields.len(), self.fields)?;
        if !self.frequencies.is_empty() {
            writeln!(f, "Field frequencies:")?;
            for (name, count) in self.frequencies.iter().take(TOP_FIELDS) {
                writeln!(f, "  {name:<24} {count}")?;
            }
            if self.frequencies.len() > TOP_FIELDS {
                writeln!(f, "  … {} more", self.frequencies.len() - TOP_FIELDS)?;
            }
        }
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Valid: {}", self.summary.unified)?;
        writeln!(f, "Invalid: {}", self.summary.rejected)?;
        if self.summary.skipped > 0 {
            writeln!(f, "Undecodable lines: {}", self.summary.skipped)?;
        }
        write!(f, "Success rate: {:.1}%", self.summary.success_rate())
    }
}
