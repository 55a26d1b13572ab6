use crate::taxonomy::Category;

/// Separator between fields of a serialized catalog line. Field values are not escaped.
pub const FIELD_DELIMITER: char = '|';

/// One flattened catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: Category,
    pub identifier: String,
    pub question: String,
    /// Compact JSON array, non-ASCII kept literal.
    pub tags_json: String,
    pub difficulty: String,
}

impl CatalogEntry {
    /// `category|identifier|question|tags_json|difficulty`
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(
            self.category.name().len()
                + self.identifier.len()
                + self.question.len()
                + self.tags_json.len()
                + self.difficulty.len()
                + 4,
        );
        for (i, field) in [
            self.category.name(),
            self.identifier.as_str(),
            self.question.as_str(),
            self.tags_json.as_str(),
            self.difficulty.as_str(),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                line.push(FIELD_DELIMITER);
            }
            line.push_str(field);
        }
        line
    }

    /// Parses `tags_json` back into the tag list.
    pub fn tags(&self) -> serde_json::Result<Vec<String>> {
        serde_json::from_str(&self.tags_json)
    }
}

/// Ordered catalog entries: categories in taxonomy order, ids ascending within each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
