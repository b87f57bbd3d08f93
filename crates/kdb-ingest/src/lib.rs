//! Catalog row building.
//!
//! This crate connects the notation decoders to a record source and a row
//! sink:
//!
//! - **Sources**: [`RecordSource`], with a CSV adapter for UTF-8 exports
//! - **Row building**: every notation column decoded into a [`CourseRecord`](kdb_model::CourseRecord)
//! - **Sinks**: [`RowSink`], with in-memory and JSON-lines implementations
//! - **Options**: error policy, worker count, academic year (TOML loadable)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use kdb_ingest::{CsvRecordSource, NormalizeOptions, normalize_catalog};
//!
//! let mut source = CsvRecordSource::from_path(Path::new("csv/kdb.csv"))?;
//! let mut records = Vec::new();
//! let summary = normalize_catalog(&mut source, &mut records, &NormalizeOptions::new())?;
//! ```

mod batch;
mod builder;
mod error;
mod options;
mod row;
mod sink;
mod source;

// === Error Types ===
pub use error::{CourseField, IngestError, Result, RowError};

// === Options ===
pub use options::{ErrorPolicy, NormalizeOptions};

// === Rows ===
pub use row::{RawCourseRow, SourceRow};

// === Row Building ===
pub use batch::{NormalizeSummary, build_all, normalize_catalog};
pub use builder::{RowOutcome, build_record};

// === Sources and Sinks ===
pub use sink::{JsonLinesSink, RowSink};
pub use source::{CsvRecordSource, RecordSource};
