//! Single-field decoding for `kdb decode`.

use clap::ValueEnum;
use kdb_model::NotationError;
use kdb_notation::{
    expand_years, parse_auditor_flag, parse_periods, split_instructors, tokenize_terms,
};
use serde_json::{Value, json};

/// Catalog column notation accepted by `kdb decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotationKind {
    /// 実施学期: term labels and their codes.
    Term,
    /// 標準履修年次: registration years.
    Year,
    /// 曜時限: schedule tokens.
    Period,
    /// 科目等履修生申請可否: auditor flag.
    Auditor,
    /// 担当教員: instructor names.
    Instructors,
}

/// Decodes `text` as `kind` and renders the result as JSON.
///
/// # Errors
///
/// Propagates the decoder's error for malformed notation.
pub fn decode_notation(kind: NotationKind, text: &str) -> Result<Value, NotationError> {
    let value = match kind {
        NotationKind::Term => Value::Array(
            tokenize_terms(text)
                .into_iter()
                .map(|label| json!({ "label": label.notation(), "code": label.code().get() }))
                .collect(),
        ),
        NotationKind::Year => {
            let years: Vec<String> = expand_years(text)?
                .iter()
                .map(ToString::to_string)
                .collect();
            json!(years)
        }
        NotationKind::Period => json!(parse_periods(text)?.to_strings()),
        NotationKind::Auditor => {
            let flag = parse_auditor_flag(text)?;
            json!({ "flag": flag, "code": flag.code() })
        }
        NotationKind::Instructors => json!(split_instructors(text)),
    };
    Ok(value)
}
