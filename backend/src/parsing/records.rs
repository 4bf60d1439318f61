//! Line-oriented interval records.
//!
//! Each non-blank line carries two whitespace separated tokens, `begin end`,
//! for example `940 1200`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use super::error::LoadError;
use super::interval_parser::parse_interval;
use crate::models::Interval;

/// What to do with a record whose end time precedes its begin time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertedPolicy {
    /// Fail the batch with [`LoadError::InvertedInterval`].
    #[default]
    Reject,
    /// Keep the record; the pairwise counter short-circuits its scan.
    Tolerate,
}

impl FromStr for InvertedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" | "deny" => Ok(Self::Reject),
            "tolerate" | "allow" | "legacy" => Ok(Self::Tolerate),
            _ => Err(format!("Unknown inverted interval policy: {}", s)),
        }
    }
}

impl fmt::Display for InvertedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvertedPolicy::Reject => write!(f, "reject"),
            InvertedPolicy::Tolerate => write!(f, "tolerate"),
        }
    }
}

/// Parse every record from `reader`.
///
/// # Arguments
/// * `reader` - Source of line records
/// * `policy` - How inverted intervals are handled
///
/// # Returns
/// * `Ok(Vec<Interval>)` in input order, blank lines skipped
/// * `Err(LoadError)` for the first bad record or read failure
pub fn parse_records<R: BufRead>(
    reader: R,
    policy: InvertedPolicy,
) -> Result<Vec<Interval>, LoadError> {
    let mut intervals = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(interval) = parse_record(&line, index + 1, policy)? {
            intervals.push(interval);
        }
    }

    log::debug!("Parsed {} interval records", intervals.len());
    Ok(intervals)
}

/// Parse records from an in-memory string.
pub fn parse_records_str(input: &str, policy: InvertedPolicy) -> Result<Vec<Interval>, LoadError> {
    parse_records(input.as_bytes(), policy)
}

fn parse_record(
    content: &str,
    line: usize,
    policy: InvertedPolicy,
) -> Result<Option<Interval>, LoadError> {
    let mut tokens = content.split_whitespace();
    let (begin, end) = match (tokens.next(), tokens.next(), tokens.next()) {
        (None, _, _) => return Ok(None),
        (Some(begin), Some(end), None) => (begin, end),
        _ => {
            return Err(LoadError::MalformedRecord {
                line,
                content: content.to_string(),
            })
        }
    };

    let interval =
        parse_interval(begin, end).map_err(|source| LoadError::InvalidTime { line, source })?;

    if interval.is_inverted() {
        match policy {
            InvertedPolicy::Reject => {
                return Err(LoadError::InvertedInterval { line, interval });
            }
            InvertedPolicy::Tolerate => {
                log::warn!("Line {}: keeping inverted interval {}", line, interval);
            }
        }
    }

    Ok(Some(interval))
}
