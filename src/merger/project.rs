//! Project-level merge and variant selection

use crate::config::{ApplicationDefinition, ProjectDefinition};
use crate::domain::FULL_REPOSITORY_NAME;

/// Merged project-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectHeader {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,

    /// Included application overrides with their origin, in read order
    ///
    /// Empty means every application is part of the project.
    pub included: Vec<(ApplicationDefinition, String)>,
}

/// Merge project records into one header
///
/// Without `name_override` every record takes part and the last declared
/// value of each field wins. With an override, only records whose name
/// matches it (ignoring case) take part and the project keeps the declared
/// name of the last of them; if none matches, every record takes part and the
/// override becomes the project name. A project without any declared name is
/// called [`FULL_REPOSITORY_NAME`].
pub fn merge_project(
    records: Vec<(ProjectDefinition, String)>,
    name_override: Option<&str>,
) -> ProjectHeader {
    let (selected, forced_name): (Vec<_>, Option<&str>) = match name_override {
        Some(name) if records.iter().any(|(def, _)| def.is_named(name)) => (
            records
                .into_iter()
                .filter(|(def, _)| def.is_named(name))
                .collect(),
            None,
        ),
        Some(name) => (records, Some(name)),
        None => (records, None),
    };

    let mut header = ProjectHeader::default();
    let mut declared_name: Option<String> = None;

    for (def, origin) in selected {
        let ProjectDefinition {
            name,
            description,
            version,
            included_applications,
        } = def;

        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            declared_name = Some(name);
        }
        if description.is_some() {
            header.description = description;
        }
        if version.is_some() {
            header.version = version;
        }
        header.included.extend(
            included_applications
                .into_iter()
                .map(|app| (app, origin.clone())),
        );
    }

    header.name = forced_name
        .map(ToString::to_string)
        .or(declared_name)
        .unwrap_or_else(|| FULL_REPOSITORY_NAME.to_string());
    header
}
