//! Parsers for play session input.
//!
//! # Parsers
//!
//! - [`time_token`]: normalize and validate military-time tokens (`900`, `1345`)
//! - [`interval_parser`]: turn a `(begin, end)` token pair into an [`Interval`](crate::models::Interval)
//! - [`records`]: load a batch of line records, failing on the first bad line
//!
//! # Example
//!
//! ```
//! use arcade_rust::parsing::{parse_records_str, InvertedPolicy};
//!
//! let intervals = parse_records_str("900 910\n940 1200\n", InvertedPolicy::Reject)
//!     .expect("valid records");
//! assert_eq!(intervals.len(), 2);
//! ```

pub mod error;
pub mod interval_parser;
pub mod records;
pub mod time_token;


pub use error::{LoadError, ParseError, Side};
pub use interval_parser::parse_interval;
pub use records::{parse_records, parse_records_str, InvertedPolicy};
pub use time_token::{is_valid_hhmm, normalize_token, parse_time_token};
