//! Decoders for the course catalog's abbreviated notation.
//!
//! Every decoder is a pure function from the raw field text to a structured
//! value or a [`NotationError`]. Decoders index by character, never by byte.
//!
//! - **term**: term field tokenizer (`春AB` -> SpringA, SpringB) and code mapping
//! - **period**: weekday x period schedule grammar (`月・木1-3`, `応談78`)
//! - **year**: registration-year ranges (`1・3` -> 1, 2, 3)
//! - **auditor**: credited-auditor glyphs
//! - **instructor**: instructor list splitting
//! - **datetime**: export timestamps
//! - **numeric**: integer columns

pub mod auditor;
pub mod datetime;
pub mod instructor;
pub mod numeric;
pub mod period;
pub mod term;
mod text;
pub mod year;

pub use kdb_model::NotationError;

pub use auditor::parse_auditor_flag;
pub use datetime::{UPDATED_AT_FORMAT, parse_updated_at};
pub use instructor::split_instructors;
pub use numeric::parse_integer;
pub use period::parse_periods;
pub use term::{map_all, map_labels, term_code, tokenize_terms};
pub use year::expand_years;
