use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::RecordError;
use crate::models::RawRecord;
use crate::utils::validate_file_size;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads the record at `path`.
///
/// Returns `Ok(None)` when nothing exists at `path`; an unpopulated slot is not an error.
pub fn load_record(path: &Path) -> Result<Option<RawRecord>, RecordError> {
    if !path.exists() {
        return Ok(None);
    }

    // Size is checked on the open handle so the file can't change in between
    let mut file = File::open(path)?;
    validate_file_size(&file)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    parse_record(&bytes).map(Some)
}

/// Parses record bytes, first as UTF-8 with an optional BOM, then once more as plain UTF-8.
///
/// Bytes are parsed into a JSON value before the record fields are extracted, so a key
/// repeated in the document resolves to its last value.
pub fn parse_record(bytes: &[u8]) -> Result<RawRecord, RecordError> {
    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value = match serde_json::from_slice::<Value>(without_bom) {
        Ok(value) => value,
        Err(primary) => {
            tracing::debug!("BOM-tolerant parse failed ({}), retrying as plain UTF-8", primary);
            serde_json::from_slice::<Value>(bytes)
                .map_err(|_| RecordError::Malformed(primary.to_string()))?
        }
    };
    serde_json::from_value(value).map_err(|e| RecordError::Malformed(e.to_string()))
}
