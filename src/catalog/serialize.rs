//! Flat-file output for a built catalog.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CatalogError;
use crate::models::{Catalog, CatalogEntry};

/// One line per entry, in catalog order. Calling it again yields the same lines.
pub fn serialize(catalog: &Catalog) -> impl Iterator<Item = String> + '_ {
    catalog.iter().map(CatalogEntry::to_line)
}

/// Replaces `out` with `lines`, each terminated by `\n`.
///
/// Lines go to a uniquely named temporary file beside `out` that is renamed over `out`
/// once fully written, so `out` is never left half-written and never appended to.
pub fn write_catalog<I, S>(lines: I, out: &Path) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let write_error = |source: io::Error| CatalogError::OutputWrite { path: out.to_path_buf(), source };

    if out.file_name().is_none() {
        return Err(write_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path has no file name",
        )));
    }
    let parent = match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any error path removes it
    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    echo_catalog(lines, BufWriter::new(temp.as_file_mut())).map_err(write_error)?;
    temp.persist(out).map_err(|e| write_error(e.error))?;

    tracing::debug!(path = %out.display(), "catalog written");
    Ok(())
}

/// Writes `lines` to `writer` in the same format as [`write_catalog`].
pub fn echo_catalog<I, S, W>(lines: I, mut writer: W) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
