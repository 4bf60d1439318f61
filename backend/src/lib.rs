//! # Arcade Rust
//!
//! Works out how many arcade machines a venue needs so that no two
//! overlapping play sessions ever share a machine.
//!
//! ## Features
//!
//! - **Time Handling**: military-time tokens (`900`, `1345`) parsed into
//!   minutes since midnight
//! - **Loading**: line records of `begin end` pairs, failing on the first bad line
//! - **Counting**: pairwise overlap counting, plus a sweep-line instantaneous peak
//! - **Planning**: file in, machine count out, configured from `arcade.toml`
//!
//! ## Architecture
//!
//! - [`models`]: `TimeOfDay` and `Interval` value types
//! - [`parsing`]: token, interval and record parsers
//! - [`services`]: counting algorithms and the planning run
//! - [`config`]: TOML and environment configuration
//! - [`error`]: errors for a planning run
//!
//! ## Example
//!
//! ```
//! use arcade_rust::parsing::{parse_records_str, InvertedPolicy};
//! use arcade_rust::services::count_peak_concurrency;
//!
//! let sessions = parse_records_str(
//!     "900 910\n940 1200\n950 1120\n1100 1130\n1300 1400\n1350 1420\n",
//!     InvertedPolicy::Reject,
//! )
//! .unwrap();
//! assert_eq!(count_peak_concurrency(&sessions), 3);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::ArcadeConfig;
pub use error::{ArcadeError, Result};
