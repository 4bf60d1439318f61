//! Military-time tokens such as `900` or `1345`.
//!
//! A token is normalized to `HH:MM` first and only then validated, so that the
//! validation rule can be stated once as a pattern over the normalized form.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ParseError, Side};
use crate::models::TimeOfDay;

static HHMM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("hh:mm pattern is valid")
});

/// Normalize a 3 or 4 character token into `HH:MM`.
///
/// Any other length (and any non-ASCII token) normalizes to the empty string,
/// which [`is_valid_hhmm`] rejects.
///
/// # Example
/// ```
/// use arcade_rust::parsing::normalize_token;
/// assert_eq!(normalize_token("900"), "09:00");
/// assert_eq!(normalize_token("1345"), "13:45");
/// assert_eq!(normalize_token(""), "");
/// ```
pub fn normalize_token(raw: &str) -> String {
    if !raw.is_ascii() {
        return String::new();
    }

    match raw.len() {
        3 => format!("0{}:{}", &raw[..1], &raw[1..]),
        4 => format!("{}:{}", &raw[..2], &raw[2..]),
        _ => String::new(),
    }
}

/// Check that `hhmm` has an hour in `[0, 23]` and a two digit minute in `[0, 59]`.
pub fn is_valid_hhmm(hhmm: &str) -> bool {
    HHMM.is_match(hhmm)
}

/// Parse an already validated-looking `HH:MM` string.
fn parse_hhmm(hhmm: &str) -> Option<TimeOfDay> {
    if !is_valid_hhmm(hhmm) {
        return None;
    }
    let (hour, minute) = hhmm.split_once(':')?;
    TimeOfDay::from_hm(hour.parse().ok()?, minute.parse().ok()?)
}

/// Parse one raw token into a [`TimeOfDay`].
///
/// `side` is only used to label the error.
pub fn parse_time_token(raw: &str, side: Side) -> Result<TimeOfDay, ParseError> {
    parse_hhmm(&normalize_token(raw)).ok_or_else(|| ParseError::MalformedTimeToken {
        side,
        raw: raw.to_string(),
    })
}
