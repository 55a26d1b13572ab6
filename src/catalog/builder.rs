//! Catalog builder for on-disk question records.
//!
//! # Error Handling Strategy
//!
//! - **Missing records**: most identifier slots are legitimately unpopulated, so an absent
//!   `question.json` produces neither an entry nor a diagnostic
//! - **Bad records**: a record that cannot be read or parsed is logged, recorded as a
//!   [`Diagnostic`] and skipped; the walk always continues to the last identifier
//! - **Base directory**: checked before any record is touched; if it is missing or
//!   unreadable the build fails with [`CatalogError::BaseDirectoryUnavailable`]
//!
//! Building only reads. Writing the result is [`write_catalog`](super::write_catalog)'s job.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::CatalogError;
use crate::models::{BuildReport, CatalogEntry, CategoryCount, Diagnostic, RawRecord};
use crate::parsers::load_record;
use crate::taxonomy::{Category, Taxonomy};

pub const RECORD_FILE_NAME: &str = "question.json";
pub const DETAIL_FILE_NAME: &str = "detail.md";

/// Path of the record for `id_str` in `category`. Does not touch the filesystem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use question_catalog::catalog::resolve;
/// use question_catalog::taxonomy::Category;
///
/// let path = resolve(Path::new("questions"), Category::Network, "net_003");
/// assert_eq!(path, Path::new("questions/network/net_003/question.json"));
/// ```
pub fn resolve(base_dir: &Path, category: Category, id_str: &str) -> PathBuf {
    base_dir.join(category.name()).join(id_str).join(RECORD_FILE_NAME)
}

/// Projects a raw record onto a catalog entry.
///
/// Tags are re-serialized as a compact JSON array in their original order, with
/// non-ASCII characters written as-is.
pub fn normalize(category: Category, identifier: String, raw: RawRecord) -> CatalogEntry {
    let tags_json = Value::from(raw.tags).to_string();
    CatalogEntry {
        category,
        identifier,
        question: raw.question,
        tags_json,
        difficulty: raw.difficulty,
    }
}

/// Builds catalogs for one taxonomy.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    taxonomy: Taxonomy,
}

impl CatalogBuilder {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Walks every identifier of the taxonomy under `base_dir` and collects the records found.
    ///
    /// Entries come out in taxonomy order: categories as declared, ids ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BaseDirectoryUnavailable`] if `base_dir` does not exist, is not a
    /// directory, or cannot be listed. Per-record failures never fail the build; they are
    /// returned in [`BuildReport::diagnostics`].
    pub fn build(&self, base_dir: &Path) -> Result<BuildReport, CatalogError> {
        check_base_dir(base_dir)?;

        let mut report = BuildReport {
            counts: self
                .taxonomy
                .ranges()
                .iter()
                .map(|range| CategoryCount {
                    category: range.category,
                    expected: range.len(),
                    found: 0,
                    unreadable: 0,
                    with_detail: 0,
                })
                .collect(),
            ..BuildReport::default()
        };

        for identifier in self.taxonomy.identifiers() {
            let id_str = identifier.id_str();
            let path = resolve(base_dir, identifier.category, &id_str);
            let count = report.counts.iter_mut().find(|c| c.category == identifier.category);

            match load_record(&path) {
                Ok(Some(raw)) => {
                    tracing::debug!(identifier = %id_str, "loaded record");
                    if let Some(count) = count {
                        count.found += 1;
                        if path.with_file_name(DETAIL_FILE_NAME).is_file() {
                            count.with_detail += 1;
                        }
                    }
                    report.catalog.push(normalize(identifier.category, id_str, raw));
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(
                        identifier = %id_str,
                        path = %path.display(),
                        "skipping record: {}",
                        error
                    );
                    if let Some(count) = count {
                        count.unreadable += 1;
                    }
                    report.diagnostics.push(Diagnostic { identifier, path, error });
                }
            }
        }

        tracing::info!(
            found = report.found(),
            expected = report.expected(),
            unreadable = report.diagnostics.len(),
            "catalog built"
        );

        Ok(report)
    }
}

/// Builds the catalog for the stock taxonomy.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use question_catalog::build_catalog;
///
/// let report = build_catalog(Path::new("interview/questions"))?;
/// println!("{} of {} questions found", report.found(), report.expected());
/// # Ok::<(), question_catalog::CatalogError>(())
/// ```
pub fn build_catalog(base_dir: &Path) -> Result<BuildReport, CatalogError> {
    CatalogBuilder::default().build(base_dir)
}

fn check_base_dir(base_dir: &Path) -> Result<(), CatalogError> {
    let unavailable = |reason: String| CatalogError::BaseDirectoryUnavailable {
        path: base_dir.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(base_dir).map_err(|e| unavailable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(unavailable("not a directory".to_string()));
    }
    fs::read_dir(base_dir).map_err(|e| unavailable(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::taxonomy::CategoryRange;

    fn write_record(base: &Path, category: Category, id_str: &str, json: &str) {
        let path = resolve(base, category, id_str);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }

    #[test]
    fn test_resolve_is_pure_join() {
        let path = resolve(Path::new("/does/not/exist"), Category::DesignPattern, "dp_002");
        assert_eq!(path, PathBuf::from("/does/not/exist/design_pattern/dp_002/question.json"));
    }

    #[test]
    fn test_normalize_keeps_non_ascii_and_order() {
        let raw = RawRecord {
            question: "虚函数表是什么？".to_string(),
            tags: vec!["多态".to_string(), "C++".to_string(), "vtable".to_string()],
            difficulty: "3".to_string(),
        };
        let entry = normalize(Category::Cpp, "cpp_004".to_string(), raw);
        assert_eq!(entry.tags_json, r#"["多态","C++","vtable"]"#);
        assert_eq!(entry.question, "虚函数表是什么？");
        assert_eq!(entry.difficulty, "3");
    }

    #[test]
    fn test_normalize_escapes_json_specials_in_tags() {
        let raw = RawRecord { tags: vec![r#"say "hi""#.to_string()], ..RawRecord::default() };
        let entry = normalize(Category::Qt, "qt_001".to_string(), raw);
        assert_eq!(entry.tags_json, r#"["say \"hi\""]"#);
        assert_eq!(entry.tags().unwrap(), vec![r#"say "hi""#]);
    }

    #[test]
    fn test_normalize_empty_record() {
        let entry = normalize(Category::Project, "proj_001".to_string(), RawRecord::default());
        assert_eq!(entry.question, "");
        assert_eq!(entry.tags_json, "[]");
        assert_eq!(entry.difficulty, "");
    }

    #[test]
    fn test_build_counts_and_detail_docs() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), Category::Qt, "qt_002", r#"{"question":"a"}"#);
        write_record(dir.path(), Category::Qt, "qt_005", r#"{"question":"b"}"#);
        fs::write(dir.path().join("qt/qt_005/detail.md"), "# b\n").unwrap();

        let builder =
            CatalogBuilder::new(Taxonomy::new(vec![CategoryRange::new(Category::Qt, 1..=6)]).unwrap());
        let report = builder.build(dir.path()).unwrap();

        let count = report.count_for(Category::Qt).unwrap();
        assert_eq!(count.expected, 6);
        assert_eq!(count.found, 2);
        assert_eq!(count.with_detail, 1);
        assert_eq!(count.unreadable, 0);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_build_records_unreadable_item() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), Category::Cpp, "cpp_001", r#"{"question":"ok"}"#);
        write_record(dir.path(), Category::Cpp, "cpp_002", "{{{{");
        write_record(dir.path(), Category::Cpp, "cpp_003", r#"{"question":"also ok"}"#);

        let report = build_catalog(dir.path()).unwrap();
        let ids: Vec<&str> = report.catalog.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["cpp_001", "cpp_003"]);
        assert_eq!(report.unreadable_identifiers(), vec!["cpp_002"]);
        assert_eq!(report.malformed_count(), 1);
        assert_eq!(report.count_for(Category::Cpp).unwrap().unreadable, 1);
    }

    #[test]
    fn test_build_rejects_file_as_base_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("questions");
        fs::write(&file, "").unwrap();

        let err = build_catalog(&file).unwrap_err();
        assert!(matches!(err, CatalogError::BaseDirectoryUnavailable { .. }));
        assert!(err.to_string().contains("not a directory"));
    }
}
