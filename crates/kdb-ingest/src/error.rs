//! Error types for catalog ingestion.

use std::fmt;
use std::path::PathBuf;

use kdb_model::NotationError;
use thiserror::Error;

/// Catalog column whose notation failed to decode. Only columns with a
/// fallible decoder appear; term and instructor text always decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseField {
    InstructionalType,
    StandardRegistrationYear,
    Period,
    CreditedAuditors,
    UpdatedAt,
}

impl CourseField {
    /// Header of the column in the catalog export.
    pub fn column(&self) -> &'static str {
        match self {
            CourseField::InstructionalType => "授業方法",
            CourseField::StandardRegistrationYear => "標準履修年次",
            CourseField::Period => "曜時限",
            CourseField::CreditedAuditors => "科目等履修生申請可否",
            CourseField::UpdatedAt => "データ更新日",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseField::InstructionalType => "instructional_type",
            CourseField::StandardRegistrationYear => "standard_registration_year",
            CourseField::Period => "period",
            CourseField::CreditedAuditors => "credited_auditors",
            CourseField::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.column())
    }
}

/// A single row whose field could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, course {course_number}: {field} {raw:?}: {source}")]
pub struct RowError {
    /// Line of the record in the source (1-based, 0 when unknown).
    pub line: u64,
    pub course_number: String,
    pub field: CourseField,
    /// Raw field text as read from the source.
    pub raw: String,
    #[source]
    pub source: NotationError,
}

/// Errors that can occur while reading, building, or writing catalog rows.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// Failed to open a source file.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or deserialize a CSV record.
    #[error("failed to read CSV {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    // === Configuration Errors ===
    /// Failed to read a configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the options.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // === Row Errors ===
    /// A row was rejected under the abort policy.
    #[error("row rejected: {0}")]
    Row(#[from] RowError),

    // === Sink Errors ===
    /// Failed to write to the row sink.
    #[error("failed to write normalized row: {0}")]
    SinkWrite(#[source] std::io::Error),

    /// Failed to encode a normalized row.
    #[error("failed to encode normalized row: {0}")]
    SinkEncode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
