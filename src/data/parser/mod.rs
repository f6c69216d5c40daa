//! Timepoint list parsing
//!
//! Turns user-entered timepoint text (one per line, or one per row of a file)
//! into [`Observation`]s relative to a reference instant.

use chrono::NaiveDateTime;
use std::path::Path;

use super::error::TimestampError;
use super::timestamp::{parse_timestamp, TimestampPrecision};
use crate::decay::Observation;

/// Parse an ordered list of timepoint strings into observations
///
/// Blank entries are skipped and labels are trimmed; the remaining entries keep
/// their order. Parsing stops at the first entry that is not a valid timestamp.
///
/// # Example
///
/// ```rust,ignore
/// let obs = parse_observations(reference, ["2025-01-01 06:00", "", "2025-01-02 06:00"], TimestampPrecision::Full)?;
/// assert_eq!(obs.len(), 2);
/// ```
pub fn parse_observations<I, S>(
    reference: NaiveDateTime,
    lines: I,
    precision: TimestampPrecision,
) -> Result<Vec<Observation>, TimestampError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let label = line.as_ref().trim();
            if label.is_empty() {
                None
            } else {
                Some(label.to_string())
            }
        })
        .map(|label| {
            let timestamp = parse_timestamp(&label, precision)?;
            Ok(Observation::new(label, timestamp, reference))
        })
        .collect()
}

/// Split a block of text into timepoint lines
pub fn split_timepoints(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read timepoints from a file, one per line
///
/// Lines starting with `#` are comments. When a line holds several
/// comma-separated fields only the first is used.
pub fn read_timepoints(path: impl AsRef<Path>) -> Result<Vec<String>, TimestampError> {
    let path = path.as_ref();
    let read_err = |e: csv::Error| TimestampError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(read_err)?;

    let mut timepoints = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        if let Some(field) = record.get(0) {
            if !field.is_empty() {
                timepoints.push(field.to_string());
            }
        }
    }
    Ok(timepoints)
}
