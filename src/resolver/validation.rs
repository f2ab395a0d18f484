//! Reference validation for built projects
//!
//! Dependencies are stored as names. This pass reports each reference that
//! names no application of the project; it never changes the project.

use crate::domain::Project;
use crate::error::{ArchweaveError, reference};

/// Report every dependency whose target is not part of the project
///
/// Errors are returned in application order, then dependency order. A
/// duplicated dangling dependency is reported once per declaration.
pub fn validate_references(project: &Project) -> Vec<ArchweaveError> {
    project
        .unresolved_references()
        .into_iter()
        .map(|(app, dep)| reference::dangling(&app.name, &dep.reference))
        .collect()
}
