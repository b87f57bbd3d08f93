//! Tests for whole-catalog normalization.

use std::io::Write;

use kdb_ingest::{
    CsvRecordSource, ErrorPolicy, IngestError, JsonLinesSink, NormalizeOptions, RawCourseRow,
    RecordSource, SourceRow, build_all, normalize_catalog,
};
use kdb_model::CourseRecord;

const HEADER: &str = "\u{feff}科目番号,科目名,授業方法,単位数,標準履修年次,実施学期,曜時限,教室,担当教員,授業概要,備考,科目等履修生申請可否,申請条件,英語(日本語)科目名,科目コード,要件科目名,データ更新日";

fn catalog(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

const GOOD_1: &str = r#"FA01111,情報リテラシー(講義),1,1.0,1,春A,月1,3A202,"筑波 太郎,筑波 花子",概要,,×,,Information Literacy,,,2021-03-01 14:27:49"#;
const GOOD_2: &str = "FA01121,情報リテラシー(演習),2,1.0,1・2,春BC,火3-4,,筑波 太郎,,,△,,,,,2021-03-01 14:27:49";
const HEADING: &str = ",専門基礎科目,,,,,,,,,,,,,,,";
const BAD_PERIOD: &str = "FA01131,データサイエンス,1,2.0,2,秋AB,月9,,,,,,,,,,2021-03-01 14:27:49";

#[test]
fn csv_source_reads_rows_with_lines() {
    let text = catalog(&[GOOD_1, HEADING]);
    let mut source = CsvRecordSource::from_reader(text.as_bytes());
    let rows = source.read_rows().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].raw.course_number, "FA01111");
    assert_eq!(rows[0].raw.instructor, "筑波 太郎,筑波 花子");
    assert_eq!(rows[1].raw.course_name, "専門基礎科目");
}

#[test]
fn normalizes_rows_in_source_order() {
    let text = catalog(&[GOOD_1, HEADING, GOOD_2]);
    let mut source = CsvRecordSource::from_reader(text.as_bytes());
    let mut records: Vec<CourseRecord> = Vec::new();
    let options = NormalizeOptions::new().with_academic_year(Some(2021));

    let summary = normalize_catalog(&mut source, &mut records, &options).unwrap();

    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.normalized, 2);
    assert_eq!(summary.skipped, 1);
    assert!(!summary.has_rejections());
    let numbers: Vec<&str> = records.iter().map(|r| r.course_number.as_str()).collect();
    assert_eq!(numbers, vec!["FA01111", "FA01121"]);
    assert_eq!(records[1].periods.to_string(), "火3 火4");
    assert!(records.iter().all(|r| r.year == Some(2021)));
}

#[test]
fn abort_policy_stops_at_first_rejected_row() {
    let text = catalog(&[GOOD_1, BAD_PERIOD, GOOD_2]);
    let mut source = CsvRecordSource::from_reader(text.as_bytes());
    let mut records: Vec<CourseRecord> = Vec::new();

    let error = normalize_catalog(&mut source, &mut records, &NormalizeOptions::new()).unwrap_err();

    let row_error = match error {
        IngestError::Row(row_error) => row_error,
        other => panic!("expected a row error, got {other}"),
    };
    assert_eq!(row_error.line, 3);
    assert_eq!(row_error.course_number, "FA01131");
    assert_eq!(records.len(), 1);
}

#[test]
fn skip_policy_collects_rejected_rows() {
    let text = catalog(&[GOOD_1, BAD_PERIOD, GOOD_2]);
    let mut source = CsvRecordSource::from_reader(text.as_bytes());
    let mut records: Vec<CourseRecord> = Vec::new();
    let options = NormalizeOptions::new().with_error_policy(ErrorPolicy::Skip);

    let summary = normalize_catalog(&mut source, &mut records, &options).unwrap();

    assert_eq!(summary.normalized, 2);
    assert!(summary.has_rejections());
    assert_eq!(summary.rejected.len(), 1);
    assert_eq!(summary.rejected[0].raw, "月9");
    assert_eq!(records.len(), 2);
}

#[test]
fn parallel_build_matches_sequential() {
    let rows: Vec<SourceRow> = (0..37)
        .map(|index| {
            let raw = RawCourseRow {
                course_number: if index % 5 == 0 {
                    String::new()
                } else {
                    format!("GB{index:05}")
                },
                instructional_type: "1".to_string(),
                standard_registration_year: "1-3".to_string(),
                term: "秋ABC".to_string(),
                period: if index % 7 == 0 {
                    "月1限".to_string()
                } else {
                    format!("水{}集中", index % 8 + 1)
                },
                updated_at: "2021-03-01 14:27:49".to_string(),
                ..RawCourseRow::default()
            };
            SourceRow::new(index + 2, raw)
        })
        .collect();

    let sequential = build_all(&rows, &NormalizeOptions::new());
    let parallel = build_all(&rows, &NormalizeOptions::new().with_workers(4));

    assert_eq!(sequential.len(), rows.len());
    assert_eq!(sequential, parallel);
}

#[test]
fn in_memory_source_is_drained() {
    let mut source = vec![SourceRow::default()];
    assert_eq!(source.read_rows().unwrap().len(), 1);
    assert!(source.read_rows().unwrap().is_empty());
}

#[test]
fn json_lines_sink_writes_one_object_per_record() {
    let text = catalog(&[GOOD_1, GOOD_2]);
    let mut source = CsvRecordSource::from_reader(text.as_bytes());
    let mut sink = JsonLinesSink::new(Vec::new());

    normalize_catalog(&mut source, &mut sink, &NormalizeOptions::new()).unwrap();
    assert_eq!(sink.written(), 2);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["course_number"], "FA01111");
    assert_eq!(first["terms"], serde_json::json!([1]));
    assert_eq!(first["periods"], serde_json::json!(["月1"]));
    assert_eq!(first["credited_auditors"], "cross");
    assert_eq!(first["classroom"], "3A202");

    let second: CourseRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.standard_registration_year.len(), 2);
}

#[test]
fn csv_source_opens_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(catalog(&[GOOD_2]).as_bytes()).unwrap();

    let mut source = CsvRecordSource::from_path(file.path()).unwrap();
    let rows = source.read_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].raw.term, "春BC");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let Err(error) = CsvRecordSource::from_path(&path) else {
        panic!("opening a missing file succeeded");
    };
    assert!(matches!(error, IngestError::Open { .. }));
    assert!(error.to_string().contains("missing.csv"));
}
