//! Normalized course row handed to the row sink.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::auditor::AuditorFlag;
use crate::period::PeriodSet;
use crate::term::TermCode;
use crate::year::YearToken;

/// One catalog entry after every notation column has been decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_number: String,
    pub course_name: String,
    pub instructional_type: i32,
    /// Kept as text: the catalog uses `?` for undetermined credits.
    pub credits: String,
    pub standard_registration_year: Vec<YearToken>,
    pub terms: Vec<TermCode>,
    pub periods: PeriodSet,
    pub classroom: Option<String>,
    pub instructors: Vec<String>,
    pub course_overview: Option<String>,
    pub remarks: Option<String>,
    pub credited_auditors: AuditorFlag,
    pub application_conditions: Option<String>,
    pub alt_course_name: Option<String>,
    pub course_code: Option<String>,
    pub course_code_name: Option<String>,
    /// The export's own "data updated" column.
    pub csv_updated_at: DateTime<FixedOffset>,
    /// Academic year the export belongs to, when configured.
    pub year: Option<i32>,
}
