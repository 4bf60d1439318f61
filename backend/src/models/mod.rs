pub mod interval;
pub mod time;

#[cfg(test)]
mod time_tests;

pub use interval::*;
pub use time::*;
