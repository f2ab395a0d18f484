//! Application category
//!
//! Categories follow the domain-driven design split of subdomains, plus
//! `External` for systems owned by someone else.

use std::fmt;

use serde::Serialize;

/// Category of an application within a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Core domain, the reason the project exists
    Core,
    /// Supports the core domain
    Supporting,
    /// Generic capability that could be bought off the shelf
    #[default]
    Generic,
    /// Third-party or otherwise external system
    External,
}

impl Category {
    /// All known categories, in declaration order
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::Supporting,
        Category::Generic,
        Category::External,
    ];

    /// Parse a category name, ignoring case and surrounding whitespace
    ///
    /// Returns `None` for names outside the known set.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Supporting => "supporting",
            Category::Generic => "generic",
            Category::External => "external",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
