//! Raw catalog rows as the export lays them out.

use serde::Deserialize;

/// One catalog entry before decoding. Every column is kept as text; columns
/// missing from the source read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawCourseRow {
    #[serde(rename = "科目番号")]
    pub course_number: String,
    #[serde(rename = "科目名")]
    pub course_name: String,
    #[serde(rename = "授業方法")]
    pub instructional_type: String,
    #[serde(rename = "単位数")]
    pub credits: String,
    #[serde(rename = "標準履修年次")]
    pub standard_registration_year: String,
    #[serde(rename = "実施学期")]
    pub term: String,
    #[serde(rename = "曜時限")]
    pub period: String,
    #[serde(rename = "教室")]
    pub classroom: String,
    #[serde(rename = "担当教員")]
    pub instructor: String,
    #[serde(rename = "授業概要")]
    pub course_overview: String,
    #[serde(rename = "備考")]
    pub remarks: String,
    #[serde(rename = "科目等履修生申請可否")]
    pub credited_auditors: String,
    #[serde(rename = "申請条件")]
    pub application_conditions: String,
    #[serde(rename = "英語(日本語)科目名")]
    pub alt_course_name: String,
    #[serde(rename = "科目コード")]
    pub course_code: String,
    #[serde(rename = "要件科目名")]
    pub course_code_name: String,
    #[serde(rename = "データ更新日")]
    pub updated_at: String,
}

/// A raw row tagged with where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line of the record in the source, 0 when unknown.
    pub line: u64,
    pub raw: RawCourseRow,
}

impl SourceRow {
    pub fn new(line: u64, raw: RawCourseRow) -> Self {
        Self { line, raw }
    }
}
