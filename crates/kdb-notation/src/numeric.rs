//! Numeric column parsing.

use kdb_model::NotationError;

/// Parses an integer column, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`NotationError::InvalidInteger`] for blank or non-numeric text.
pub fn parse_integer(text: &str) -> Result<i32, NotationError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| NotationError::InvalidInteger(text.to_string()))
}
