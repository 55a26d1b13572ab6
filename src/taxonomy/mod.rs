//! The fixed taxonomy of question categories and their id ranges.
//!
//! A [`Taxonomy`] is a plain value handed to the catalog builder; nothing here
//! touches the filesystem except [`Taxonomy::load`], which reads an alternate
//! table from JSON:
//!
//! ```json
//! {"categories": [{"category": "cpp", "first": 1, "last": 15}]}
//! ```

pub mod category;
pub mod identifier;

use std::collections::HashSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use category::Category;
pub use identifier::{Identifier, MAX_SEQUENCE, format_identifier};

use crate::error::CatalogError;

/// Ascending id range declared for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRange {
    pub category: Category,
    pub first: u32,
    pub last: u32,
}

impl CategoryRange {
    pub fn new(category: Category, ids: RangeInclusive<u32>) -> Self {
        Self { category, first: *ids.start(), last: *ids.end() }
    }

    pub fn ids(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        if self.is_empty() { 0 } else { (self.last - self.first) as usize + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    categories: Vec<CategoryRange>,
}

/// Ordered category → id-range table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    ranges: Vec<CategoryRange>,
}

impl Taxonomy {
    /// Builds a taxonomy, rejecting duplicate categories and ranges that are empty,
    /// start at zero, or exceed three digits.
    pub fn new(ranges: Vec<CategoryRange>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for range in &ranges {
            if !seen.insert(range.category) {
                return Err(CatalogError::Taxonomy(format!(
                    "category '{}' declared more than once",
                    range.category
                )));
            }
            if range.first == 0 || range.first > range.last || range.last > MAX_SEQUENCE {
                return Err(CatalogError::Taxonomy(format!(
                    "category '{}' has invalid id range {}..={} (expected 1 <= first <= last <= {})",
                    range.category, range.first, range.last, MAX_SEQUENCE
                )));
            }
        }
        Ok(Self { ranges })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: TaxonomyFile = serde_json::from_str(json)
            .map_err(|e| CatalogError::Taxonomy(format!("failed to parse taxonomy JSON: {}", e)))?;
        Self::new(file.categories)
    }

    /// Loads a taxonomy from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|e| {
            CatalogError::Taxonomy(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn ranges(&self) -> &[CategoryRange] {
        &self.ranges
    }

    /// Every identifier slot: categories in declaration order, ids ascending.
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.ranges
            .iter()
            .flat_map(|range| range.ids().map(move |n| Identifier::new(range.category, n)))
    }

    /// Number of slots declared for `category` (0 if the category is not declared).
    pub fn expected(&self, category: Category) -> usize {
        self.ranges.iter().find(|r| r.category == category).map_or(0, CategoryRange::len)
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.ranges
            .iter()
            .any(|r| r.category == identifier.category && r.ids().contains(&identifier.number))
    }

    /// Total number of identifier slots.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(CategoryRange::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let ranges = Category::ALL
            .into_iter()
            .map(|category| CategoryRange::new(category, category.default_ids()))
            .collect();
        Self { ranges }
    }
}
