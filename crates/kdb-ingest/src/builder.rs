//! Builds one normalized record from one raw catalog row.

use kdb_model::{CourseRecord, NotationError};
use kdb_notation::{
    expand_years, map_labels, parse_auditor_flag, parse_integer, parse_periods, parse_updated_at,
    split_instructors, tokenize_terms,
};
use tracing::trace;

use crate::error::{CourseField, RowError};
use crate::options::NormalizeOptions;
use crate::row::SourceRow;

/// Result of building a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Built(Box<CourseRecord>),
    /// Rows without a course number are headings or notes, not courses.
    Skipped,
}

/// Decodes every notation column of `row`.
///
/// # Errors
///
/// Returns the first field that fails to decode, with its column and raw text.
pub fn build_record(row: &SourceRow, options: &NormalizeOptions) -> Result<RowOutcome, RowError> {
    let raw = &row.raw;
    let course_number = raw.course_number.trim();
    if course_number.is_empty() {
        trace!(line = row.line, "skipping row without course number");
        return Ok(RowOutcome::Skipped);
    }

    let decode = |field: CourseField, value: &str| {
        let course_number = course_number.to_string();
        let raw = value.to_string();
        move |source: NotationError| RowError {
            line: row.line,
            course_number,
            field,
            raw,
            source,
        }
    };

    let instructional_type = parse_integer(&raw.instructional_type).map_err(decode(
        CourseField::InstructionalType,
        &raw.instructional_type,
    ))?;
    let standard_registration_year = expand_years(&raw.standard_registration_year).map_err(
        decode(
            CourseField::StandardRegistrationYear,
            &raw.standard_registration_year,
        ),
    )?;
    let terms = map_labels(&tokenize_terms(&raw.term));
    let periods =
        parse_periods(&raw.period).map_err(decode(CourseField::Period, &raw.period))?;
    let credited_auditors = parse_auditor_flag(&raw.credited_auditors).map_err(decode(
        CourseField::CreditedAuditors,
        &raw.credited_auditors,
    ))?;
    let csv_updated_at = parse_updated_at(&raw.updated_at)
        .map_err(decode(CourseField::UpdatedAt, &raw.updated_at))?;

    let record = CourseRecord {
        course_number: course_number.to_string(),
        course_name: raw.course_name.clone(),
        instructional_type,
        credits: raw.credits.trim().to_string(),
        standard_registration_year,
        terms,
        periods,
        classroom: non_empty(&raw.classroom),
        instructors: split_instructors(&raw.instructor),
        course_overview: non_empty(&raw.course_overview),
        remarks: non_empty(&raw.remarks),
        credited_auditors,
        application_conditions: non_empty(&raw.application_conditions),
        alt_course_name: non_empty(&raw.alt_course_name),
        course_code: non_empty(&raw.course_code),
        course_code_name: non_empty(&raw.course_code_name),
        csv_updated_at,
        year: options.academic_year,
    };
    Ok(RowOutcome::Built(Box::new(record)))
}

/// `None` for blank text.
fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
