//! Raw project records as read from definition files

use serde::Deserialize;

use super::ApplicationDefinition;
use super::serialization::null_as_default;

/// One project definition, possibly partial
///
/// Several project records can live in the same folder. Records sharing a name
/// (case-insensitively) describe the same project variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDefinition {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Applications this project is restricted to, with per-project overrides
    ///
    /// Empty means every application found in the definitions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub included_applications: Vec<ApplicationDefinition>,
}

impl ProjectDefinition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether this record declares the given name, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|own| own.trim().to_lowercase() == name.trim().to_lowercase())
    }
}
