//! Data models for the question catalog.
//!
//! - [`RawRecord`] - the fields read from one `question.json`
//! - [`CatalogEntry`] / [`Catalog`] - normalized, ordered output rows
//! - [`BuildReport`] - a built catalog plus per-item diagnostics and counts

pub mod entry;
pub mod record;
pub mod report;

pub use entry::{Catalog, CatalogEntry, FIELD_DELIMITER};
pub use record::RawRecord;
pub use report::{BuildReport, CategoryCount, Diagnostic};
