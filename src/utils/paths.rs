use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use crate::error::RecordError;

// Maximum size of a single record file: 10MB
pub const MAX_RECORD_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that an open record file is within [`MAX_RECORD_SIZE_BYTES`].
///
/// Takes the open handle rather than a path so the size check and the read see the same file.
pub fn validate_file_size(file: &File) -> Result<(), RecordError> {
    let size = file.metadata()?.len();
    if size > MAX_RECORD_SIZE_BYTES {
        return Err(RecordError::TooLarge { size, max: MAX_RECORD_SIZE_BYTES });
    }
    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use question_catalog::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/interview/questions");
/// // Returns "~/interview/questions" when the home directory is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
