//! Tests for the simple field decoders.

use chrono::{Datelike, TimeZone, Timelike};
use kdb_model::{AuditorFlag, NotationError};
use kdb_notation::{parse_auditor_flag, parse_integer, parse_updated_at, split_instructors};

#[test]
fn auditor_glyphs() {
    assert_eq!(parse_auditor_flag(""), Ok(AuditorFlag::Empty));
    assert_eq!(parse_auditor_flag("△"), Ok(AuditorFlag::Triangle));
    assert_eq!(parse_auditor_flag("×"), Ok(AuditorFlag::Cross));
}

#[test]
fn auditor_rejects_other_text() {
    assert_eq!(
        parse_auditor_flag("fdasfd"),
        Err(NotationError::InvalidAuditorFlag("fdasfd".to_string()))
    );
    assert!(parse_auditor_flag(" ×").is_err());
}

#[test]
fn instructors_split_on_commas() {
    assert_eq!(
        split_instructors("筑波 太郎, 筑波 花子，山田"),
        vec!["筑波 太郎", "筑波 花子", "山田"]
    );
}

#[test]
fn instructors_drop_empty_entries() {
    assert!(split_instructors("").is_empty());
    assert_eq!(split_instructors("山田,,"), vec!["山田"]);
}

#[test]
fn updated_at_is_japan_time() {
    let parsed = parse_updated_at("2021-03-01 14:27:49").unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 9 * 3600);
    assert_eq!(
        (parsed.year(), parsed.month(), parsed.day()),
        (2021, 3, 1)
    );
    assert_eq!(
        (parsed.hour(), parsed.minute(), parsed.second()),
        (14, 27, 49)
    );
    let utc = chrono::Utc
        .with_ymd_and_hms(2021, 3, 1, 5, 27, 49)
        .unwrap();
    assert_eq!(parsed, utc);
}

#[test]
fn updated_at_rejects_other_layouts() {
    assert_eq!(
        parse_updated_at("2021/03/01"),
        Err(NotationError::InvalidTimestamp("2021/03/01".to_string()))
    );
}

#[test]
fn integer_column() {
    assert_eq!(parse_integer(" 1 "), Ok(1));
    assert!(parse_integer("").is_err());
    assert!(parse_integer("講義").is_err());
}
