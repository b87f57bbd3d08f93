//! Normalization of a whole catalog export.
//!
//! Rows are independent, so they are decoded in contiguous chunks on scoped
//! threads and re-joined in source order before reaching the sink.

use std::thread;

use tracing::{info, info_span, warn};

use crate::builder::{RowOutcome, build_record};
use crate::error::{Result, RowError};
use crate::options::{ErrorPolicy, NormalizeOptions};
use crate::row::SourceRow;
use crate::sink::RowSink;
use crate::source::RecordSource;

/// Counts from a normalization run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeSummary {
    pub rows_read: usize,
    pub normalized: usize,
    pub skipped: usize,
    /// Rows left out under [`ErrorPolicy::Skip`].
    pub rejected: Vec<RowError>,
}

impl NormalizeSummary {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Decodes every row, preserving source order.
pub fn build_all(
    rows: &[SourceRow],
    options: &NormalizeOptions,
) -> Vec<std::result::Result<RowOutcome, RowError>> {
    let workers = options.workers.max(1);
    if workers == 1 || rows.len() < 2 {
        return rows.iter().map(|row| build_record(row, options)).collect();
    }

    let chunk_size = rows.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = rows
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|row| build_record(row, options))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    })
}

/// Reads every row from `source`, decodes it, and hands the records to `sink`.
///
/// # Errors
///
/// Fails on source or sink errors, and on the first rejected row when the
/// policy is [`ErrorPolicy::Abort`]. Records accepted before an abort stay in
/// the sink.
pub fn normalize_catalog<S, K>(
    source: &mut S,
    sink: &mut K,
    options: &NormalizeOptions,
) -> Result<NormalizeSummary>
where
    S: RecordSource + ?Sized,
    K: RowSink + ?Sized,
{
    let span = info_span!("normalize", workers = options.workers);
    let _guard = span.enter();

    let rows = source.read_rows()?;
    info!(rows = rows.len(), "read catalog rows");

    let mut summary = NormalizeSummary {
        rows_read: rows.len(),
        ..NormalizeSummary::default()
    };
    for outcome in build_all(&rows, options) {
        match outcome {
            Ok(RowOutcome::Built(record)) => {
                sink.accept(*record)?;
                summary.normalized += 1;
            }
            Ok(RowOutcome::Skipped) => summary.skipped += 1,
            Err(error) => match options.error_policy {
                ErrorPolicy::Abort => return Err(error.into()),
                ErrorPolicy::Skip => {
                    warn!(
                        line = error.line,
                        course_number = %error.course_number,
                        field = %error.field,
                        raw = %error.raw,
                        "rejected row: {}",
                        error.source
                    );
                    summary.rejected.push(error);
                }
            },
        }
    }
    sink.finish()?;

    info!(
        normalized = summary.normalized,
        skipped = summary.skipped,
        rejected = summary.rejected.len(),
        "normalization complete"
    );
    Ok(summary)
}
