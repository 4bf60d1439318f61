//! Error types for token and record parsing.

use std::fmt;

use crate::models::Interval;

/// Which token of an interval record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Begin,
    End,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Begin => write!(f, "beginning"),
            Side::End => write!(f, "ending"),
        }
    }
}

/// Error produced while turning raw time tokens into an interval.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token is not 3-4 digits, or its hour/minute is out of range.
    #[error("invalid hh:mm format for {side} time: {raw:?}")]
    MalformedTimeToken { side: Side, raw: String },
}

impl ParseError {
    /// The side of the record that failed.
    pub fn side(&self) -> Side {
        match self {
            ParseError::MalformedTimeToken { side, .. } => *side,
        }
    }

    /// The raw token as it appeared in the input.
    pub fn raw(&self) -> &str {
        match self {
            ParseError::MalformedTimeToken { raw, .. } => raw,
        }
    }
}

/// Error produced while loading a batch of line records.
///
/// Loading is fail-fast: the first error aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read interval records")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected two time tokens, found {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("line {line}: invalid {} time {:?}", .source.side(), .source.raw())]
    InvalidTime {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: interval {interval} ends before it begins")]
    InvertedInterval { line: usize, interval: Interval },
}

impl LoadError {
    /// 1-based line number of the offending record, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io(_) => None,
            LoadError::MalformedRecord { line, .. }
            | LoadError::InvalidTime { line, .. }
            | LoadError::InvertedInterval { line, .. } => Some(*line),
        }
    }
}
