//! Registration year (標準履修年次) expansion.

use kdb_model::{NotationError, YearToken};
use tracing::debug;

use crate::text::{fold_fullwidth, is_dash, is_middle_dot, is_space};

const RANGE_SEPARATOR: char = '-';

/// Expands a registration-year field into explicit year tokens.
///
/// Accepts a single year (`2`), the placeholder (`?`), or one two-endpoint
/// range written with any of the catalog's separators (`1-3`, `1・3`, `1～3`,
/// `1 - 3`). A blank field expands to nothing.
///
/// Only the first range is read: endpoints are the characters at positions
/// 0 and 2 after normalization, and anything after them is ignored. A range
/// written backwards (`3-1`) covers no year.
///
/// # Errors
///
/// Returns [`NotationError::MalformedYearRange`] when an endpoint is missing
/// or not a year digit.
pub fn expand_years(text: &str) -> Result<Vec<YearToken>, NotationError> {
    let malformed = || NotationError::MalformedYearRange(text.to_string());
    let chars: Vec<char> = text
        .chars()
        .filter(|ch| !is_space(*ch))
        .map(normalize_separator)
        .collect();

    match chars.as_slice() {
        [] => Ok(Vec::new()),
        [single] => YearToken::from_char(*single)
            .map(|token| vec![token])
            .ok_or_else(malformed),
        [first, _, third, rest @ ..] => {
            let (Some(start), Some(end)) = (year_digit(*first), year_digit(*third)) else {
                return Err(malformed());
            };
            if !rest.is_empty() {
                let ignored: String = rest.iter().collect();
                debug!(input = text, ignored = %ignored, "ignoring text after year range");
            }
            Ok((start..=end).map(YearToken::Year).collect())
        }
        _ => Err(malformed()),
    }
}

fn normalize_separator(ch: char) -> char {
    let ch = fold_fullwidth(ch);
    if is_dash(ch) || is_middle_dot(ch) {
        RANGE_SEPARATOR
    } else {
        ch
    }
}

fn year_digit(ch: char) -> Option<u8> {
    match YearToken::from_char(ch) {
        Some(YearToken::Year(value)) => Some(value),
        _ => None,
    }
}
