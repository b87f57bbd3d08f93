//! Credited-auditor availability (科目等履修生申請可否).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether non-degree students may apply to take the course for credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditorFlag {
    /// `×`: not accepted.
    Cross,
    /// `△`: accepted with conditions.
    Triangle,
    /// Empty field.
    Empty,
}

impl AuditorFlag {
    /// Returns the glyph the catalog uses (empty for [`AuditorFlag::Empty`]).
    pub fn glyph(&self) -> &'static str {
        match self {
            AuditorFlag::Cross => "×",
            AuditorFlag::Triangle => "△",
            AuditorFlag::Empty => "",
        }
    }

    /// Storage code: 0 = `×`, 1 = `△`, 2 = empty.
    pub fn code(&self) -> u8 {
        match self {
            AuditorFlag::Cross => 0,
            AuditorFlag::Triangle => 1,
            AuditorFlag::Empty => 2,
        }
    }
}

impl fmt::Display for AuditorFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditorFlag::Empty => f.write_str("(empty)"),
            other => f.write_str(other.glyph()),
        }
    }
}
