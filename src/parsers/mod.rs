//! Parsing of on-disk `question.json` records.
//!
//! Each record is parsed independently. A record that cannot be read or parsed yields a
//! [`RecordError`](crate::error::RecordError) for that record alone; callers decide
//! whether to skip it.

pub mod deserializers;
pub mod record;

pub use record::{load_record, parse_record};
