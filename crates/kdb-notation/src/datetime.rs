//! Export timestamp (データ更新日) parsing.
//!
//! The export writes local wall-clock time in Japan without an offset.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use kdb_model::NotationError;

/// Layout of the "data updated" column.
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Japan Standard Time, UTC+09:00 with no daylight saving.
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Parses `YYYY-MM-DD HH:MM:SS` as Japan Standard Time.
///
/// # Errors
///
/// Returns [`NotationError::InvalidTimestamp`] when the text does not match
/// the layout.
pub fn parse_updated_at(text: &str) -> Result<DateTime<FixedOffset>, NotationError> {
    let invalid = || NotationError::InvalidTimestamp(text.to_string());
    let naive = NaiveDateTime::parse_from_str(text.trim(), UPDATED_AT_FORMAT)
        .map_err(|_| invalid())?;
    let jst = FixedOffset::east_opt(JST_OFFSET_SECONDS).ok_or_else(invalid)?;
    naive.and_local_timezone(jst).single().ok_or_else(invalid)
}
