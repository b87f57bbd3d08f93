//! Configuration options for catalog normalization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// What to do with a row whose notation fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first rejected row.
    #[default]
    Abort,
    /// Log the rejected row, leave it out, and keep going.
    Skip,
}

/// Options controlling a normalization run.
///
/// Loadable from TOML; every key is optional:
///
/// ```toml
/// academic_year = 2021
/// error_policy = "skip"
/// workers = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Academic year the export belongs to, stamped on every record.
    pub academic_year: Option<i32>,

    /// Handling of rows that fail to decode.
    pub error_policy: ErrorPolicy,

    /// Number of threads rows are decoded on. `1` decodes inline.
    pub workers: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            academic_year: None,
            error_policy: ErrorPolicy::default(),
            workers: 1,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_academic_year(mut self, year: Option<i32>) -> Self {
        self.academic_year = year;
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Zero is treated as one.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let options: Self = toml::from_str(text)?;
        let workers = options.workers;
        Ok(options.with_workers(workers))
    }

    /// Load options from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| IngestError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
