//! Record sources: where raw catalog rows come from.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::row::{RawCourseRow, SourceRow};

/// Yields one raw field set per catalog entry. Text must already be decoded.
pub trait RecordSource {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>>;
}

/// In-memory rows; reading drains them.
impl RecordSource for Vec<SourceRow> {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>> {
        Ok(std::mem::take(self))
    }
}

/// Reads a UTF-8 catalog export with a header row.
pub struct CsvRecordSource<R> {
    reader: csv::Reader<R>,
    origin: String,
}

impl CsvRecordSource<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_origin(file, path.display().to_string()))
    }
}

impl<R: Read> CsvRecordSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_origin(reader, "<reader>".to_string())
    }

    fn with_origin(reader: R, origin: String) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self { reader, origin }
    }

    fn csv_error(&self, source: csv::Error) -> IngestError {
        IngestError::Csv {
            origin: self.origin.clone(),
            source,
        }
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>> {
        let headers: StringRecord = match self.reader.headers() {
            Ok(headers) => headers
                .iter()
                .map(|header| header.trim_matches('\u{feff}').trim())
                .collect(),
            Err(source) => return Err(self.csv_error(source)),
        };

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        loop {
            match self.reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(source) => return Err(self.csv_error(source)),
            }
            let line = record.position().map_or(0, csv::Position::line);
            let raw: RawCourseRow = record
                .deserialize(Some(&headers))
                .map_err(|source| self.csv_error(source))?;
            rows.push(SourceRow::new(line, raw));
        }
        debug!(origin = %self.origin, rows = rows.len(), "read catalog export");
        Ok(rows)
    }
}
