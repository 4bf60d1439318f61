//! Service layer: counting and the file based planning run.
//!
//! [`concurrency`] holds the pure counting algorithms; [`planner`] wires them
//! to the record loader and the output file.

pub mod concurrency;
pub mod planner;


pub use concurrency::{
    count_peak_concurrency, count_with_strategy, instantaneous_peak, local_overlap_counts,
    CountStrategy,
};
pub use planner::{plan, read_intervals, write_count, PlanOptions, PlanReport};
