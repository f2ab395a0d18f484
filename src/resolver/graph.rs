//! Adjacency views of a built project
//!
//! ```text
//! HashMap<String, Vec<String>>
//!    ↓              ↓
//!  app name     [dep1, dep2]      (dependency list)
//!  app name     [dependent1]      (reverse list)
//! ```
//!
//! Both views list every application of the project as a key, with an empty
//! list when it has no edges. Dangling references are kept in the dependency
//! list and have no key of their own in the reverse list.

use std::collections::HashMap;

use crate::domain::Project;

/// Map each application to the names it depends on, duplicates removed
pub fn build_dependency_list(project: &Project) -> HashMap<String, Vec<String>> {
    project
        .applications()
        .iter()
        .map(|app| {
            let mut deps: Vec<String> = Vec::new();
            for dep in &app.dependencies {
                if !deps.contains(&dep.reference) {
                    deps.push(dep.reference.clone());
                }
            }
            (app.name.clone(), deps)
        })
        .collect()
}

/// Map each application to the names of the applications depending on it
pub fn build_reverse_list(project: &Project) -> HashMap<String, Vec<String>> {
    project
        .applications()
        .iter()
        .map(|app| {
            let dependents = project
                .find_applications_that_reference_to(app, false)
                .into_iter()
                .map(|dependent| dependent.name.clone())
                .collect();
            (app.name.clone(), dependents)
        })
        .collect()
}
