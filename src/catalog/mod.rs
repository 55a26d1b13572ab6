//! Catalog building and output.
//!
//! [`CatalogBuilder::build`] turns the records under a base directory into a
//! [`BuildReport`](crate::models::BuildReport); [`serialize`] renders the catalog as
//! pipe-delimited lines; [`write_catalog`] and [`echo_catalog`] send those lines to a file
//! or any writer. Building never writes, so each step can be exercised on its own.

pub mod builder;
pub mod discovery;
pub mod serialize;

pub use builder::{CatalogBuilder, build_catalog, normalize, resolve};
pub use discovery::find_untracked_records;
pub use serialize::{echo_catalog, serialize, write_catalog};
