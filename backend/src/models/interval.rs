use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::TimeOfDay;

/// A play session `[begin, end)` within a single day.
///
/// No ordering between `begin` and `end` is enforced here. An interval whose
/// end precedes its begin is *inverted*; loaders decide whether to accept it
/// and the pairwise counter gives it special treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub begin: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub const fn new(begin: TimeOfDay, end: TimeOfDay) -> Self {
        Self { begin, end }
    }

    /// Build an interval from minutes since midnight for both ends.
    pub fn from_minutes(begin: u16, end: u16) -> Option<Self> {
        Some(Self::new(
            TimeOfDay::from_minutes(begin)?,
            TimeOfDay::from_minutes(end)?,
        ))
    }

    /// Strict half-open overlap: sharing only an endpoint is not an overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// True when the end time precedes the begin time.
    pub fn is_inverted(&self) -> bool {
        self.end < self.begin
    }

    /// Length in minutes, `None` for inverted intervals.
    pub fn duration_minutes(&self) -> Option<u16> {
        self.end.minutes().checked_sub(self.begin.minutes())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} - {}}}", self.begin, self.end)
    }
}
