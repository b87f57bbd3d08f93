//! Credited-auditor flag (科目等履修生申請可否) decoding.

use kdb_model::{AuditorFlag, NotationError};

/// Decodes the auditor glyph by exact match.
///
/// # Errors
///
/// Returns [`NotationError::InvalidAuditorFlag`] for anything other than
/// `×`, `△`, or an empty field.
pub fn parse_auditor_flag(text: &str) -> Result<AuditorFlag, NotationError> {
    match text {
        "×" => Ok(AuditorFlag::Cross),
        "△" => Ok(AuditorFlag::Triangle),
        "" => Ok(AuditorFlag::Empty),
        other => Err(NotationError::InvalidAuditorFlag(other.to_string())),
    }
}
