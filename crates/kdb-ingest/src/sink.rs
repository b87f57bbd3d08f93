//! Row sinks: where normalized records go.

use std::io::Write;

use kdb_model::CourseRecord;

use crate::error::{IngestError, Result};

/// Accepts normalized records for storage.
pub trait RowSink {
    fn accept(&mut self, record: CourseRecord) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl RowSink for Vec<CourseRecord> {
    fn accept(&mut self, record: CourseRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Writes one JSON object per record, newline-delimited.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for JsonLinesSink<W> {
    fn accept(&mut self, record: CourseRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record).map_err(IngestError::SinkEncode)?;
        self.writer
            .write_all(b"\n")
            .map_err(IngestError::SinkWrite)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(IngestError::SinkWrite)
    }
}
