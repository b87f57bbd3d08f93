//! Term (実施学期) vocabulary and its stable integer codes.
//!
//! The catalog writes the sub-period a course runs in as a short label such
//! as `春A` (spring, module A) or `通年` (full year). The set of labels is
//! closed; each one maps to a fixed integer code used by storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// Canonical term label, declared in vocabulary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TermLabel {
    /// 春A
    SpringA,
    /// 春B
    SpringB,
    /// 春C
    SpringC,
    /// 秋A
    FallA,
    /// 秋B
    FallB,
    /// 秋C
    FallC,
    /// 夏季休業中
    SummerBreak,
    /// 春季休業中
    SpringBreak,
    /// 通年
    FullYear,
    /// 春学期
    SpringSemester,
    /// 秋学期
    FallSemester,
}

impl TermLabel {
    /// Every label in vocabulary order.
    pub const ALL: [TermLabel; 11] = [
        TermLabel::SpringA,
        TermLabel::SpringB,
        TermLabel::SpringC,
        TermLabel::FallA,
        TermLabel::FallB,
        TermLabel::FallC,
        TermLabel::SummerBreak,
        TermLabel::SpringBreak,
        TermLabel::FullYear,
        TermLabel::SpringSemester,
        TermLabel::FallSemester,
    ];

    /// Returns the label as the catalog writes it.
    pub fn notation(&self) -> &'static str {
        match self {
            TermLabel::SpringA => "春A",
            TermLabel::SpringB => "春B",
            TermLabel::SpringC => "春C",
            TermLabel::FallA => "秋A",
            TermLabel::FallB => "秋B",
            TermLabel::FallC => "秋C",
            TermLabel::SummerBreak => "夏季休業中",
            TermLabel::SpringBreak => "春季休業中",
            TermLabel::FullYear => "通年",
            TermLabel::SpringSemester => "春学期",
            TermLabel::FallSemester => "秋学期",
        }
    }

    /// Returns the English variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TermLabel::SpringA => "SpringA",
            TermLabel::SpringB => "SpringB",
            TermLabel::SpringC => "SpringC",
            TermLabel::FallA => "FallA",
            TermLabel::FallB => "FallB",
            TermLabel::FallC => "FallC",
            TermLabel::SummerBreak => "SummerBreak",
            TermLabel::SpringBreak => "SpringBreak",
            TermLabel::FullYear => "FullYear",
            TermLabel::SpringSemester => "SpringSemester",
            TermLabel::FallSemester => "FallSemester",
        }
    }

    /// For module labels (A/B/C within a season), the season glyph and the
    /// module letter. `None` for whole-period labels.
    pub fn module(&self) -> Option<(char, char)> {
        match self {
            TermLabel::SpringA => Some(('春', 'A')),
            TermLabel::SpringB => Some(('春', 'B')),
            TermLabel::SpringC => Some(('春', 'C')),
            TermLabel::FallA => Some(('秋', 'A')),
            TermLabel::FallB => Some(('秋', 'B')),
            TermLabel::FallC => Some(('秋', 'C')),
            _ => None,
        }
    }

    /// Returns the stable storage code for this label.
    pub fn code(&self) -> TermCode {
        let code = match self {
            TermLabel::SpringA => 1,
            TermLabel::SpringB => 2,
            TermLabel::SpringC => 3,
            TermLabel::FallA => 4,
            TermLabel::FallB => 5,
            TermLabel::FallC => 6,
            TermLabel::SummerBreak => 7,
            TermLabel::SpringBreak => 8,
            TermLabel::FullYear => 9,
            TermLabel::SpringSemester => 10,
            TermLabel::FallSemester => 11,
        };
        TermCode(code)
    }
}

impl fmt::Display for TermLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for TermLabel {
    type Err = NotationError;

    /// Accepts either the catalog notation (`春A`) or the variant name
    /// (`SpringA`). Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TermLabel::ALL
            .into_iter()
            .find(|label| label.notation() == trimmed || label.as_str() == trimmed)
            .ok_or_else(|| NotationError::UnknownTermLabel(s.to_string()))
    }
}

/// Integer code for a [`TermLabel`], always within `1..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TermCode(u8);

impl TermCode {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 11;

    /// Returns `None` outside `1..=11`.
    pub fn new(code: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&code).then_some(Self(code))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Reverse lookup of the label this code was assigned to.
    pub fn label(self) -> TermLabel {
        // Codes are only constructed inside 1..=11.
        TermLabel::ALL[usize::from(self.0 - Self::MIN)]
    }
}

impl From<TermLabel> for TermCode {
    fn from(label: TermLabel) -> Self {
        label.code()
    }
}

impl From<TermCode> for u8 {
    fn from(code: TermCode) -> Self {
        code.0
    }
}

impl TryFrom<u8> for TermCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TermCode::new(value).ok_or_else(|| format!("term code out of range: {value}"))
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
