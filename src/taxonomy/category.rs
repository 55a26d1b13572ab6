use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A question category. The variant decides both the directory name on disk and the
/// prefix token used in identifiers; the two differ for every category except `cpp`
/// and `qt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cpp,
    Qt,
    Network,
    DesignPattern,
    Project,
    Behavior,
}

impl Category {
    /// Every category, in stock declaration order.
    pub const ALL: [Category; 6] = [
        Category::Cpp,
        Category::Qt,
        Category::Network,
        Category::DesignPattern,
        Category::Project,
        Category::Behavior,
    ];

    /// Directory name under the base directory.
    pub fn name(self) -> &'static str {
        match self {
            Category::Cpp => "cpp",
            Category::Qt => "qt",
            Category::Network => "network",
            Category::DesignPattern => "design_pattern",
            Category::Project => "project",
            Category::Behavior => "behavior",
        }
    }

    /// Prefix token for identifiers, e.g. `net` in `net_004`.
    pub fn token(self) -> &'static str {
        match self {
            Category::Cpp => "cpp",
            Category::Qt => "qt",
            Category::Network => "net",
            Category::DesignPattern => "dp",
            Category::Project => "proj",
            Category::Behavior => "beh",
        }
    }

    /// Id range used by the stock taxonomy.
    pub fn default_ids(self) -> RangeInclusive<u32> {
        match self {
            Category::Cpp => 1..=15,
            Category::Qt => 1..=10,
            Category::Network => 1..=10,
            Category::DesignPattern => 1..=5,
            Category::Project => 1..=8,
            Category::Behavior => 1..=10,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
