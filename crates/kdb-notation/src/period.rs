//! Schedule (曜時限) notation decoding.
//!
//! The catalog compresses a course's weekly slots into strings such as
//! `月1-3,5`, `月・木1-3`, `月1火2`, or `応談78`. Decoding runs in stages:
//!
//! 1. strip spaces, unify dashes, drop the middle dots joining weekdays, and
//!    drop commas (they only separate sub-ranges of one weekday group);
//! 2. tokenize, turning each special keyword into a marker letter followed by
//!    a synthetic period `0` ("no explicit sub-period");
//! 3. expand `a-b` period ranges into explicit digit runs;
//! 4. split into groups of one letter run followed by one digit run;
//! 5. emit the letters x digits cross-product of every group.
//!
//! Only stage 4 can fail.

use kdb_model::{NotationError, PeriodSet, PeriodToken, Slot, SpecialMarker, Weekday};
use tracing::trace;

use crate::text::{fold_fullwidth, is_comma, is_dash, is_middle_dot, is_space};

/// Highest digit that takes part in group segmentation. `0` is the synthetic
/// marker period; `9` is not a period and stays an unknown character.
const MAX_PERIOD_DIGIT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Day(Weekday),
    Marker(SpecialMarker),
    Digit(u8),
    Hyphen,
    Other(char),
}

impl Symbol {
    fn is_letter(self) -> bool {
        matches!(self, Symbol::Day(_) | Symbol::Marker(_))
    }

    fn is_digit(self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    fn push_to(self, out: &mut String) {
        match self {
            Symbol::Day(day) => out.push(day.glyph()),
            Symbol::Marker(marker) => out.push_str(marker.keyword()),
            Symbol::Digit(digit) => out.push(char::from(b'0' + digit)),
            Symbol::Hyphen => out.push('-'),
            Symbol::Other(ch) => out.push(ch),
        }
    }
}

/// Decodes a schedule field into a set of period tokens.
///
/// ```
/// use kdb_notation::parse_periods;
///
/// let periods = parse_periods("月・木1-2").unwrap();
/// assert_eq!(periods.to_string(), "月1 月2 木1 木2");
/// assert!(parse_periods("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`NotationError::MalformedPeriodNotation`] carrying the offending
/// group when a group lacks exactly one weekday/period boundary, contains a
/// character outside the grammar, or pairs a weekday with no period.
pub fn parse_periods(text: &str) -> Result<PeriodSet, NotationError> {
    let normalized = normalize(text);
    let symbols = expand_ranges(tokenize(&normalized));

    let mut periods = PeriodSet::new();
    for group in segment(&symbols) {
        emit_group(group, &mut periods)?;
    }
    trace!(input = text, periods = %periods, "decoded schedule notation");
    Ok(periods)
}

/// Stages 1 through 4 of the pipeline: spaces, dashes, middle dots, commas.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|ch| !is_space(*ch))
        .map(fold_fullwidth)
        .map(|ch| if is_dash(ch) { '-' } else { ch })
        .filter(|ch| !is_middle_dot(*ch) && !is_comma(*ch))
        .collect()
}

/// Keyword substitution and character classification.
fn tokenize(normalized: &str) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(normalized.len());
    let mut rest = normalized;
    'outer: while !rest.is_empty() {
        for marker in SpecialMarker::ALL {
            if let Some(after) = rest.strip_prefix(marker.keyword()) {
                symbols.push(Symbol::Marker(marker));
                symbols.push(Symbol::Digit(0));
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            break;
        };
        rest = chars.as_str();
        symbols.push(classify(ch));
    }
    symbols
}

fn classify(ch: char) -> Symbol {
    if ch == '-' {
        return Symbol::Hyphen;
    }
    if let Some(day) = Weekday::from_glyph(ch) {
        return Symbol::Day(day);
    }
    match ch.to_digit(10).and_then(|digit| u8::try_from(digit).ok()) {
        Some(digit) if digit <= MAX_PERIOD_DIGIT => Symbol::Digit(digit),
        _ => Symbol::Other(ch),
    }
}

/// Replaces `a-b` (1 <= a < b <= 8) with the digits a..=b. Ranges chain, so
/// `1-3-5` covers 1 through 5. Any other hyphen is left in place.
fn expand_ranges(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
    let mut iter = symbols.into_iter().peekable();
    while let Some(symbol) = iter.next() {
        if symbol == Symbol::Hyphen
            && let (Some(Symbol::Digit(start)), Some(Symbol::Digit(end))) =
                (out.last().copied(), iter.peek().copied())
            && start >= 1
            && start < end
        {
            out.extend((start + 1..=end).map(Symbol::Digit));
            iter.next();
            continue;
        }
        out.push(symbol);
    }
    out
}

/// Splits before every letter that directly follows a period digit.
fn segment(symbols: &[Symbol]) -> Vec<&[Symbol]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for index in 1..symbols.len() {
        if symbols[index].is_letter() && symbols[index - 1].is_digit() {
            groups.push(&symbols[start..index]);
            start = index;
        }
    }
    if start < symbols.len() {
        groups.push(&symbols[start..]);
    }
    groups
}

fn emit_group(group: &[Symbol], periods: &mut PeriodSet) -> Result<(), NotationError> {
    let malformed = || {
        let mut text = String::new();
        for symbol in group {
            symbol.push_to(&mut text);
        }
        NotationError::MalformedPeriodNotation(text)
    };

    let boundaries: Vec<usize> = (1..group.len())
        .filter(|&index| group[index].is_digit() && group[index - 1].is_letter())
        .collect();
    let [boundary] = boundaries.as_slice() else {
        return Err(malformed());
    };
    let (letters, digits) = group.split_at(*boundary);
    if !letters.iter().all(|symbol| symbol.is_letter())
        || !digits.iter().all(|symbol| symbol.is_digit())
    {
        return Err(malformed());
    }

    for letter in letters {
        for digit in digits {
            let token = match (*letter, *digit) {
                (Symbol::Day(day), Symbol::Digit(value)) => {
                    let slot = Slot::new(value).ok_or_else(malformed)?;
                    PeriodToken::slot(day, slot)
                }
                (Symbol::Marker(marker), Symbol::Digit(0)) => PeriodToken::marker(marker),
                (Symbol::Marker(marker), Symbol::Digit(value)) => {
                    let slot = Slot::new(value).ok_or_else(malformed)?;
                    PeriodToken::marker_slot(marker, slot)
                }
                _ => return Err(malformed()),
            };
            periods.insert(token);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(symbols: &[Symbol]) -> String {
        let mut text = String::new();
        for symbol in symbols {
            symbol.push_to(&mut text);
        }
        text
    }

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("月・火 3，5ー7"), "月火35-7");
    }

    #[test]
    fn keywords_become_marker_with_period_zero() {
        let symbols = tokenize("応談78");
        assert_eq!(
            symbols,
            vec![
                Symbol::Marker(SpecialMarker::ByArrangement),
                Symbol::Digit(0),
                Symbol::Digit(7),
                Symbol::Digit(8),
            ]
        );
    }

    #[test]
    fn ranges_expand_and_chain() {
        assert_eq!(render(&expand_ranges(tokenize("月1-3-5"))), "月12345");
        assert_eq!(render(&expand_ranges(tokenize("月3-1"))), "月3-1");
        assert_eq!(render(&expand_ranges(tokenize("集中-3"))), "集中0-3");
    }

    #[test]
    fn segment_splits_on_letter_after_digit() {
        let symbols = tokenize("月火1水2集中");
        let groups: Vec<String> = segment(&symbols).into_iter().map(render).collect();
        assert_eq!(groups, vec!["月火1", "水2", "集中0"]);
    }
}
