//! Value types for the course catalog notation decoder.
//!
//! - **term**: term labels (`春A`, `通年`, ...) and their integer codes
//! - **period**: weekday/slot pairs and special markers (`月1`, `応談`)
//! - **year**: registration-year tokens (`1`, `?`)
//! - **auditor**: credited-auditor glyphs
//! - **course**: the normalized catalog row
//! - **error**: field-level decoding failures

pub mod auditor;
pub mod course;
pub mod error;
pub mod period;
pub mod term;
pub mod year;

pub use auditor::AuditorFlag;
pub use course::CourseRecord;
pub use error::{NotationError, Result};
pub use period::{PeriodSet, PeriodToken, Slot, SpecialMarker, Weekday};
pub use term::{TermCode, TermLabel};
pub use year::YearToken;
