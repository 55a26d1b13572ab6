//! Question Catalog - compile interview question records into a flat index
//!
//! Question records live on disk as `<base>/<category>/<token>_<nnn>/question.json`.
//! This library walks a fixed taxonomy of categories and id ranges, loads whichever
//! records exist, and flattens them into pipe-delimited catalog lines:
//!
//! ```text
//! category|identifier|question|tags_json|difficulty
//! ```
//!
//! - Enumerating identifiers from a [`Taxonomy`]
//! - Loading records with BOM-tolerant JSON parsing
//! - Building an ordered [`Catalog`] with per-item diagnostics
//! - Writing the catalog to a file (full replace) or any writer
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use question_catalog::{build_catalog, serialize, write_catalog};
//!
//! let report = build_catalog(Path::new("interview/questions"))?;
//! write_catalog(serialize(&report.catalog), Path::new("questions_output.txt"))?;
//! println!("Cataloged {} questions", report.found());
//! # Ok::<(), question_catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod taxonomy;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogBuilder, build_catalog, serialize, write_catalog};
pub use error::{CatalogError, RecordError};
pub use models::{BuildReport, Catalog, CatalogEntry};
pub use taxonomy::{Category, Identifier, Taxonomy, format_identifier};
pub use utils::format_path_with_tilde;
