//! Definition file format
//!
//! A definition file is a YAML or JSON document with any of these keys:
//!
//! ```yaml
//! project:            # one project record
//!   name: P
//! projects: []        # several project records (named variants)
//! application:        # one application record (alias: app)
//!   name: app1
//! applications: []    # several application records (alias: apps)
//! ```
//!
//! Each document is turned into [`RawRecord`]s tagged with the file they came
//! from. Records are emitted in the key order shown above.

pub mod application;
pub mod project;
pub mod serialization;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, record};

pub use application::{ApplicationDefinition, DependencyDefinition};
pub use project::ProjectDefinition;

use serialization::null_as_default;

/// A decoded record of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Project(ProjectDefinition),
    Application(ApplicationDefinition),
}

/// A definition record together with the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub origin: PathBuf,
    pub definition: Definition,
}

impl RawRecord {
    pub fn project(origin: impl Into<PathBuf>, definition: ProjectDefinition) -> Self {
        Self {
            origin: origin.into(),
            definition: Definition::Project(definition),
        }
    }

    pub fn application(origin: impl Into<PathBuf>, definition: ApplicationDefinition) -> Self {
        Self {
            origin: origin.into(),
            definition: Definition::Application(definition),
        }
    }

    /// Origin path formatted for diagnostics
    pub fn origin_display(&self) -> String {
        self.origin.display().to_string()
    }
}

/// Format of a definition file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// Detect the format of a path, `None` for non-definition files
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Top-level document of a definition file
#[derive(Debug, Default, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    project: Option<ProjectDefinition>,

    #[serde(default, deserialize_with = "null_as_default")]
    projects: Vec<ProjectDefinition>,

    #[serde(default, alias = "app")]
    application: Option<ApplicationDefinition>,

    #[serde(default, alias = "apps", deserialize_with = "null_as_default")]
    applications: Vec<ApplicationDefinition>,
}

impl DefinitionFile {
    fn into_records(self, origin: &Path) -> Vec<RawRecord> {
        let projects = self
            .project
            .into_iter()
            .chain(self.projects)
            .map(|def| RawRecord::project(origin, def));
        let applications = self
            .application
            .into_iter()
            .chain(self.applications)
            .map(|def| RawRecord::application(origin, def));
        projects.chain(applications).collect()
    }
}

/// Decode the contents of one definition file into records
///
/// An empty document yields no records.
///
/// # Errors
///
/// Returns `DefinitionParseFailed` if the content does not match the format.
pub fn parse_definitions(
    content: &str,
    format: DefinitionFormat,
    origin: &Path,
) -> Result<Vec<RawRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file: Option<DefinitionFile> = match format {
        DefinitionFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| record::parse_failed(origin.display().to_string(), e.to_string()))?,
        DefinitionFormat::Json => serde_json::from_str(content)
            .map_err(|e| record::parse_failed(origin.display().to_string(), e.to_string()))?,
    };

    Ok(file.unwrap_or_default().into_records(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchweaveError;

    fn origin() -> PathBuf {
        PathBuf::from("defs/app.yml")
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a/b.yml")),
            Some(DefinitionFormat::Yaml)
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("b.YAML")),
            Some(DefinitionFormat::Yaml)
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("b.json")),
            Some(DefinitionFormat::Json)
        );
        assert_eq!(DefinitionFormat::from_path(Path::new("README.md")), None);
        assert_eq!(DefinitionFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_parse_records_in_key_order() {
        let yaml = r"
applications:
  - name: app2
  - name: app3
application:
  name: app1
projects:
  - name: Variant
project:
  name: P
";
        let records = parse_definitions(yaml, DefinitionFormat::Yaml, &origin()).unwrap();
        let kinds: Vec<String> = records
            .iter()
            .map(|r| match &r.definition {
                Definition::Project(p) => format!("project:{}", p.name.clone().unwrap_or_default()),
                Definition::Application(a) => format!("app:{}", a.name),
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["project:P", "project:Variant", "app:app1", "app:app2", "app:app3"]
        );
        assert!(records.iter().all(|r| r.origin == origin()));
    }

    #[test]
    fn test_parse_app_alias() {
        let yaml = "app:\n  name: app1\n  properties:\n    env: dev\n";
        let records = parse_definitions(yaml, DefinitionFormat::Yaml, &origin()).unwrap();
        assert_eq!(records.len(), 1);
        let Definition::Application(app) = &records[0].definition else {
            panic!("expected application record");
        };
        assert_eq!(app.properties["env"], "dev");
    }

    #[test]
    fn test_parse_empty_document() {
        let records = parse_definitions("  \n", DefinitionFormat::Yaml, &origin()).unwrap();
        assert!(records.is_empty());
        let records = parse_definitions("---\n", DefinitionFormat::Yaml, &origin()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_json_document() {
        let json = r#"{"project": {"name": "P"}, "applications": [{"name": "app1"}]}"#;
        let records = parse_definitions(json, DefinitionFormat::Json, &origin()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_definitions("applications: [unclosed", DefinitionFormat::Yaml, &origin())
            .unwrap_err();
        assert!(matches!(err, ArchweaveError::DefinitionParseFailed { .. }));
        assert!(err.to_string().contains("defs/app.yml"));
    }
}
