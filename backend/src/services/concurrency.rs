//! Peak concurrency of play sessions.
//!
//! The answer to "how many machines do we need" is the largest local overlap
//! count: for every session, one for itself plus one for every other session
//! it overlaps. [`instantaneous_peak`] is the sweep-line alternative, which
//! counts sessions active at one instant and can be lower.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Interval;

/// Counting algorithm used by [`count_with_strategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStrategy {
    /// `O(n²)` local overlap counts, the reference answer.
    #[default]
    Pairwise,
    /// Sorted boundary sweep, the largest number of sessions live at once.
    Sweep,
}

impl FromStr for CountStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pairwise" | "pair" => Ok(Self::Pairwise),
            "sweep" | "sweep-line" | "sweepline" => Ok(Self::Sweep),
            _ => Err(format!("Unknown counting strategy: {}", s)),
        }
    }
}

impl fmt::Display for CountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountStrategy::Pairwise => write!(f, "pairwise"),
            CountStrategy::Sweep => write!(f, "sweep"),
        }
    }
}

/// Overlap count of the interval at `index` against the rest of the slice.
///
/// Starts at 1 for the interval itself. For an inverted interval the scan
/// stops at the first other interval it does not overlap.
fn local_overlap_count(intervals: &[Interval], index: usize) -> usize {
    let current = &intervals[index];
    let others = intervals
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .map(|(_, interval)| interval);

    let overlapping = if current.is_inverted() {
        others.take_while(|other| current.overlaps(other)).count()
    } else {
        others.filter(|other| current.overlaps(other)).count()
    };

    1 + overlapping
}

/// Local overlap count of every interval, in input order.
pub fn local_overlap_counts(intervals: &[Interval]) -> Vec<usize> {
    (0..intervals.len())
        .map(|index| local_overlap_count(intervals, index))
        .collect()
}

/// Number of machines needed to serve `intervals`.
///
/// Returns 0 for an empty slice and 1 for a single interval. Touching
/// endpoints never share a machine slot, so `9:00-9:10` and `9:10-9:40`
/// need only one machine.
///
/// # Example
/// ```
/// use arcade_rust::parsing::parse_interval;
/// use arcade_rust::services::concurrency::count_peak_concurrency;
///
/// let intervals = vec![
///     parse_interval("940", "1200").unwrap(),
///     parse_interval("950", "1120").unwrap(),
///     parse_interval("1100", "1130").unwrap(),
/// ];
/// assert_eq!(count_peak_concurrency(&intervals), 3);
/// ```
pub fn count_peak_concurrency(intervals: &[Interval]) -> usize {
    local_overlap_counts(intervals)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Largest number of intervals active at the same instant.
///
/// Ends are processed before starts at equal times, so touching intervals do
/// not stack, and zero-length intervals are never active. Returns `None`
/// when any interval is inverted.
pub fn instantaneous_peak(intervals: &[Interval]) -> Option<usize> {
    if intervals.iter().any(Interval::is_inverted) {
        return None;
    }

    let mut events: Vec<(u16, i64)> = intervals
        .iter()
        .flat_map(|interval| [(interval.begin.minutes(), 1), (interval.end.minutes(), -1)])
        .collect();
    // (time, -1) sorts before (time, +1)
    events.sort_unstable();

    let mut active: i64 = 0;
    let mut peak: i64 = 0;
    for (_, delta) in events {
        active += delta;
        peak = peak.max(active);
    }

    Some(peak as usize)
}

/// Count with the selected strategy.
///
/// The sweep has no meaning for inverted intervals; when any are present it
/// falls back to the pairwise count.
pub fn count_with_strategy(intervals: &[Interval], strategy: CountStrategy) -> usize {
    match strategy {
        CountStrategy::Pairwise => count_peak_concurrency(intervals),
        CountStrategy::Sweep => instantaneous_peak(intervals).unwrap_or_else(|| {
            log::warn!("Inverted intervals present, falling back to pairwise counting");
            count_peak_concurrency(intervals)
        }),
    }
}
