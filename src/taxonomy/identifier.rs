use std::fmt;

use super::Category;

/// Width of the zero-padded numeric suffix.
pub const ID_WIDTH: usize = 3;

/// Largest sequence number that still fits in [`ID_WIDTH`] digits.
pub const MAX_SEQUENCE: u32 = 999;

/// Renders the identifier string for a category and sequence number.
///
/// # Examples
///
/// ```
/// use question_catalog::taxonomy::{Category, format_identifier};
///
/// assert_eq!(format_identifier(Category::Cpp, 7), "cpp_007");
/// assert_eq!(format_identifier(Category::Network, 10), "net_010");
/// ```
pub fn format_identifier(category: Category, n: u32) -> String {
    format!("{}_{:0width$}", category.token(), n, width = ID_WIDTH)
}

/// One addressable catalog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    pub category: Category,
    pub number: u32,
}

impl Identifier {
    pub fn new(category: Category, number: u32) -> Self {
        Self { category, number }
    }

    pub fn id_str(&self) -> String {
        format_identifier(self.category, self.number)
    }

    /// Inverse of [`format_identifier`] for a directory found under `category`.
    /// Returns `None` unless `id_str` is exactly `<token>_<3 digits>`.
    pub fn parse(category: Category, id_str: &str) -> Option<Self> {
        let digits = id_str.strip_prefix(category.token())?.strip_prefix('_')?;
        if digits.len() != ID_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number = digits.parse().ok()?;
        Some(Self { category, number })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_identifier(self.category, self.number))
    }
}
