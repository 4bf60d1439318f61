use super::error::{ParseError, Side};
use super::time_token::parse_time_token;
use crate::models::Interval;

/// Parse a `(begin, end)` pair of raw military-time tokens into an [`Interval`].
///
/// The begin token is checked first, so when both are malformed the error
/// names the begin side. No ordering between the two times is required.
///
/// # Example
/// ```
/// use arcade_rust::parsing::parse_interval;
/// let interval = parse_interval("940", "1200").unwrap();
/// assert_eq!(interval.to_string(), "{9:40 - 12:00}");
/// ```
pub fn parse_interval(begin_token: &str, end_token: &str) -> Result<Interval, ParseError> {
    let begin = parse_time_token(begin_token, Side::Begin)?;
    let end = parse_time_token(end_token, Side::End)?;
    Ok(Interval::new(begin, end))
}
