//! Tests for building one course record from one raw row.

use kdb_ingest::{CourseField, NormalizeOptions, RawCourseRow, RowOutcome, SourceRow, build_record};
use kdb_model::{AuditorFlag, CourseRecord, NotationError, TermLabel, YearToken};

fn sample_row() -> RawCourseRow {
    RawCourseRow {
        course_number: "FA01111".to_string(),
        course_name: "情報リテラシー(講義)".to_string(),
        instructional_type: "1".to_string(),
        credits: " 1.0 ".to_string(),
        standard_registration_year: "1・2".to_string(),
        term: "春AB".to_string(),
        period: "月・木1-2".to_string(),
        classroom: String::new(),
        instructor: "筑波 太郎, 筑波 花子".to_string(),
        course_overview: "情報の基礎".to_string(),
        remarks: " ".to_string(),
        credited_auditors: "△".to_string(),
        application_conditions: String::new(),
        alt_course_name: "Information Literacy".to_string(),
        course_code: String::new(),
        course_code_name: String::new(),
        updated_at: "2021-03-01 14:27:49".to_string(),
    }
}

fn build(raw: RawCourseRow) -> CourseRecord {
    match build_record(&SourceRow::new(2, raw), &NormalizeOptions::new()).unwrap() {
        RowOutcome::Built(record) => *record,
        RowOutcome::Skipped => panic!("row was skipped"),
    }
}

#[test]
fn builds_every_decoded_column() {
    let record = build(sample_row());

    assert_eq!(record.course_number, "FA01111");
    assert_eq!(record.instructional_type, 1);
    assert_eq!(record.credits, "1.0");
    assert_eq!(
        record.standard_registration_year,
        vec![YearToken::Year(1), YearToken::Year(2)]
    );
    assert_eq!(
        record.terms,
        vec![TermLabel::SpringA.code(), TermLabel::SpringB.code()]
    );
    assert_eq!(record.periods.to_string(), "月1 月2 木1 木2");
    assert_eq!(record.instructors, vec!["筑波 太郎", "筑波 花子"]);
    assert_eq!(record.credited_auditors, AuditorFlag::Triangle);
    assert_eq!(record.csv_updated_at.to_rfc3339(), "2021-03-01T14:27:49+09:00");
}

#[test]
fn blank_optional_columns_become_none() {
    let record = build(sample_row());

    assert_eq!(record.classroom, None);
    assert_eq!(record.remarks, None);
    assert_eq!(record.course_code, None);
    assert_eq!(record.course_overview.as_deref(), Some("情報の基礎"));
    assert_eq!(record.alt_course_name.as_deref(), Some("Information Literacy"));
}

#[test]
fn academic_year_comes_from_options() {
    let options = NormalizeOptions::new().with_academic_year(Some(2021));
    let outcome = build_record(&SourceRow::new(2, sample_row()), &options).unwrap();
    let RowOutcome::Built(record) = outcome else {
        panic!("row was skipped");
    };
    assert_eq!(record.year, Some(2021));
    assert_eq!(build(sample_row()).year, None);
}

#[test]
fn backward_year_range_keeps_the_row() {
    let record = build(RawCourseRow {
        standard_registration_year: "3-1".to_string(),
        ..sample_row()
    });
    assert!(record.standard_registration_year.is_empty());
    assert_eq!(record.course_number, "FA01111");
}

#[test]
fn free_text_columns_never_reject_a_row() {
    let record = build(RawCourseRow {
        term: "未定".to_string(),
        instructor: " , ，".to_string(),
        ..sample_row()
    });
    assert!(record.terms.is_empty());
    assert!(record.instructors.is_empty());
}

#[test]
fn rows_without_course_number_are_skipped() {
    let raw = RawCourseRow {
        course_number: "  ".to_string(),
        period: "not a schedule".to_string(),
        ..sample_row()
    };
    let outcome = build_record(&SourceRow::new(9, raw), &NormalizeOptions::new());
    assert_eq!(outcome, Ok(RowOutcome::Skipped));
}

#[test]
fn malformed_period_reports_field_and_raw_text() {
    let raw = RawCourseRow {
        period: "月1限".to_string(),
        ..sample_row()
    };
    let error = build_record(&SourceRow::new(7, raw), &NormalizeOptions::new()).unwrap_err();

    assert_eq!(error.line, 7);
    assert_eq!(error.course_number, "FA01111");
    assert_eq!(error.field, CourseField::Period);
    assert_eq!(error.raw, "月1限");
    assert!(matches!(
        error.source,
        NotationError::MalformedPeriodNotation(_)
    ));
}

#[test]
fn each_decoded_column_is_attributed() {
    let cases = [
        (
            RawCourseRow {
                instructional_type: "講義".to_string(),
                ..sample_row()
            },
            CourseField::InstructionalType,
        ),
        (
            RawCourseRow {
                standard_registration_year: "1-x".to_string(),
                ..sample_row()
            },
            CourseField::StandardRegistrationYear,
        ),
        (
            RawCourseRow {
                credited_auditors: "○".to_string(),
                ..sample_row()
            },
            CourseField::CreditedAuditors,
        ),
        (
            RawCourseRow {
                updated_at: "2021/03/01".to_string(),
                ..sample_row()
            },
            CourseField::UpdatedAt,
        ),
    ];

    for (raw, field) in cases {
        let error = build_record(&SourceRow::new(1, raw), &NormalizeOptions::new()).unwrap_err();
        assert_eq!(error.field, field);
    }
}

#[test]
fn row_error_message_names_column() {
    let raw = RawCourseRow {
        credited_auditors: "○".to_string(),
        ..sample_row()
    };
    let error = build_record(&SourceRow::new(4, raw), &NormalizeOptions::new()).unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("line 4, course FA01111:"));
    assert!(message.contains("credited_auditors (科目等履修生申請可否)"));
}
