//! Term field (実施学期) tokenizer and term-code mapping.

use kdb_model::{NotationError, TermCode, TermLabel};

use crate::text::fold_fullwidth;

const MODULE_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// Detects which term labels a free-text term field mentions.
///
/// Labels come back in vocabulary order, each at most once. A module label
/// matches its base code (`春A`) and every compound code that includes it
/// (`春AB`, `春BA`, `春ABC`, ...): a season glyph followed by a run of module
/// letters counts for every letter in the run.
///
/// ```
/// use kdb_model::TermLabel;
/// use kdb_notation::tokenize_terms;
///
/// assert_eq!(tokenize_terms("春AB"), vec![TermLabel::SpringA, TermLabel::SpringB]);
/// assert!(tokenize_terms("").is_empty());
/// ```
pub fn tokenize_terms(text: &str) -> Vec<TermLabel> {
    if text.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().map(fold_fullwidth).collect();
    let folded: String = chars.iter().collect();

    TermLabel::ALL
        .into_iter()
        .filter(|label| match label.module() {
            Some((season, letter)) => {
                module_runs(&chars, season).any(|run| run.contains(&letter))
            }
            None => folded.contains(label.notation()),
        })
        .collect()
}

/// Runs of module letters directly following each occurrence of `season`.
fn module_runs(chars: &[char], season: char) -> impl Iterator<Item = &[char]> {
    chars
        .iter()
        .enumerate()
        .filter(move |(_, ch)| **ch == season)
        .map(move |(index, _)| {
            let rest = &chars[index + 1..];
            let len = rest
                .iter()
                .take_while(|ch| MODULE_LETTERS.contains(ch))
                .count();
            &rest[..len]
        })
}

/// Maps one label to its storage code.
pub fn term_code(label: TermLabel) -> TermCode {
    label.code()
}

/// Maps labels to codes, preserving input order.
pub fn map_labels(labels: &[TermLabel]) -> Vec<TermCode> {
    labels.iter().copied().map(term_code).collect()
}

/// Maps textual labels (catalog notation or variant names) to codes.
///
/// # Errors
///
/// Returns [`NotationError::UnknownTermLabel`] for the first label outside
/// the vocabulary.
pub fn map_all<S: AsRef<str>>(labels: &[S]) -> Result<Vec<TermCode>, NotationError> {
    labels
        .iter()
        .map(|label| label.as_ref().parse::<TermLabel>().map(term_code))
        .collect()
}
