//! Registration year (標準履修年次) tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// One year-of-study a course is standard coursework for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YearToken {
    /// A concrete year of study, `1..=9`.
    Year(u8),
    /// The catalog's `?` placeholder: unspecified, any year.
    Unspecified,
}

impl YearToken {
    pub const PLACEHOLDER: char = '?';

    /// Builds a numeric token; `None` outside `1..=9`.
    pub fn year(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(YearToken::Year(value))
    }

    /// Decodes a single ASCII character: a year digit or `?`.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch == Self::PLACEHOLDER {
            return Some(YearToken::Unspecified);
        }
        ch.to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(YearToken::year)
    }
}

impl fmt::Display for YearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearToken::Year(value) => write!(f, "{value}"),
            YearToken::Unspecified => write!(f, "{}", Self::PLACEHOLDER),
        }
    }
}

impl FromStr for YearToken {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => YearToken::from_char(ch),
            _ => None,
        }
        .ok_or_else(|| NotationError::MalformedYearRange(s.to_string()))
    }
}

impl From<YearToken> for String {
    fn from(token: YearToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for YearToken {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
