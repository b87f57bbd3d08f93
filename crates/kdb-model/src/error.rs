use thiserror::Error;

/// Failures raised while decoding a single catalog field.
///
/// Each variant carries the text that failed to decode so the caller can
/// report it next to the field name and row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A term label outside the fixed vocabulary.
    #[error("unknown term label: {0}")]
    UnknownTermLabel(String),
    /// A registration-year field whose endpoints are not year digits.
    #[error("malformed registration year range: {0}")]
    MalformedYearRange(String),
    /// A schedule group without exactly one weekday/period boundary.
    #[error("malformed period notation: {0}")]
    MalformedPeriodNotation(String),
    /// An auditor glyph other than `×`, `△`, or empty.
    #[error("invalid auditor flag: {0}")]
    InvalidAuditorFlag(String),
    /// A timestamp not in `YYYY-MM-DD HH:MM:SS` layout.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// A numeric column holding something other than an integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

pub type Result<T> = std::result::Result<T, NotationError>;
