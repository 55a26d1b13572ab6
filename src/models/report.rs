use std::path::PathBuf;

use super::Catalog;
use crate::error::RecordError;
use crate::taxonomy::{Category, Identifier};

/// A record that exists on disk but could not be turned into a catalog entry.
#[derive(Debug)]
pub struct Diagnostic {
    pub identifier: Identifier,
    pub path: PathBuf,
    pub error: RecordError,
}

/// Found vs expected slots for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub expected: usize,
    pub found: usize,
    pub unreadable: usize,
    /// Found items that also carry a long-form `detail.md`.
    pub with_detail: usize,
}

/// Result of one catalog build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,
    pub counts: Vec<CategoryCount>,
}

impl BuildReport {
    pub fn expected(&self) -> usize {
        self.counts.iter().map(|c| c.expected).sum()
    }

    pub fn found(&self) -> usize {
        self.catalog.len()
    }

    pub fn count_for(&self, category: Category) -> Option<&CategoryCount> {
        self.counts.iter().find(|c| c.category == category)
    }

    /// Identifiers of records that could not be read or parsed, in traversal order.
    pub fn unreadable_identifiers(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.identifier.id_str()).collect()
    }

    pub fn malformed_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.error.is_malformed()).count()
    }
}
