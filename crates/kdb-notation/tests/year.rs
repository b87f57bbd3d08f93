//! Tests for registration-year expansion.

use kdb_model::{NotationError, YearToken};
use kdb_notation::expand_years;

fn years(values: &[u8]) -> Vec<YearToken> {
    values.iter().copied().map(YearToken::Year).collect()
}

#[test]
fn hyphen_range() {
    assert_eq!(expand_years("1-3").unwrap(), years(&[1, 2, 3]));
}

#[test]
fn separator_variants_are_equivalent() {
    let expected = years(&[1, 2, 3]);
    for input in ["1・3", "1 - 3", "1～3", "1~3", "1ー3", "1－3", "１・３"] {
        assert_eq!(expand_years(input).unwrap(), expected, "input: {input}");
    }
}

#[test]
fn single_year() {
    assert_eq!(expand_years("1").unwrap(), years(&[1]));
    assert_eq!(expand_years(" 4 ").unwrap(), years(&[4]));
}

#[test]
fn placeholder_is_kept() {
    assert_eq!(expand_years("?").unwrap(), vec![YearToken::Unspecified]);
    assert_eq!(expand_years("？").unwrap(), vec![YearToken::Unspecified]);
}

#[test]
fn blank_field_expands_to_nothing() {
    assert!(expand_years("").unwrap().is_empty());
    assert!(expand_years(" 　").unwrap().is_empty());
}

#[test]
fn degenerate_range_is_one_year() {
    assert_eq!(expand_years("2-2").unwrap(), years(&[2]));
}

#[test]
fn backward_range_is_empty() {
    assert_eq!(expand_years("3-1"), Ok(vec![]));
    assert_eq!(expand_years("9・1"), Ok(vec![]));
}

#[test]
fn only_first_range_is_read() {
    assert_eq!(expand_years("1-2,4").unwrap(), years(&[1, 2]));
}

#[test]
fn non_numeric_fails() {
    assert_eq!(
        expand_years("invalid"),
        Err(NotationError::MalformedYearRange("invalid".to_string()))
    );
}

#[test]
fn malformed_shapes_fail() {
    for input in ["x", "0", "12", "1-?", "?-3", "0-2", "1-"] {
        assert!(expand_years(input).is_err(), "input: {input}");
    }
}
