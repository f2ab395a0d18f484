//! Raw application records as read from definition files

use std::collections::BTreeMap;

use serde::Deserialize;

use super::serialization::{deserialize_properties, null_as_default};
use crate::domain::Dependency;

/// One application definition, possibly partial
///
/// Several records with the same name are merged into one application. Every
/// field except `name` is optional so that a record can contribute only the
/// fields it knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplicationDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Category name; validated during merge
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub technology: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub team: Option<String>,

    #[serde(default, deserialize_with = "deserialize_properties")]
    pub properties: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<DependencyDefinition>,
}

impl ApplicationDefinition {
    /// Create a record carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A dependency as written in a definition file
///
/// Accepts a bare application name or a mapping:
///
/// ```yaml
/// dependencies:
///   - app2
///   - reference: app3
///     type: async
///     label: events
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "DependencyRepr")]
pub struct DependencyDefinition {
    pub reference: String,
    pub relationship: Option<String>,
    pub label: Option<String>,
}

impl DependencyDefinition {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            relationship: None,
            label: None,
        }
    }
}

impl From<DependencyDefinition> for Dependency {
    fn from(def: DependencyDefinition) -> Self {
        Dependency {
            reference: def.reference,
            relationship: def.relationship,
            label: def.label,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyRepr {
    Reference(String),
    Detailed {
        reference: String,
        #[serde(default, alias = "type")]
        relationship: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<DependencyRepr> for DependencyDefinition {
    fn from(repr: DependencyRepr) -> Self {
        match repr {
            DependencyRepr::Reference(reference) => DependencyDefinition::new(reference),
            DependencyRepr::Detailed {
                reference,
                relationship,
                label,
            } => DependencyDefinition {
                reference,
                relationship,
                label,
            },
        }
    }
}
