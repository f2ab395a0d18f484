//! Application and dependency types

use std::collections::BTreeMap;

use serde::Serialize;

use super::Category;

/// A directed, name-based link from one application to another
///
/// The target is not resolved when the project is built. Lookups go through
/// [`Project`](super::Project) at query time, so a reference may name an
/// application that is defined later, or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Name of the target application
    pub reference: String,

    /// Kind of relationship, e.g. `sync` or `async`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,

    /// Free-form label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Dependency {
    /// Create a dependency with no descriptive fields
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            relationship: None,
            label: None,
        }
    }

    /// Whether this dependency points at the named application
    pub fn references(&self, name: &str) -> bool {
        self.reference == name
    }
}

/// A named component of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    pub name: String,
    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

impl Application {
    /// Create an application with default category and no other fields set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: Category::default(),
            technology: None,
            summary: None,
            description: None,
            group: None,
            team: None,
            properties: BTreeMap::new(),
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Whether any dependency of this application points at `name`
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep.references(name))
    }
}
