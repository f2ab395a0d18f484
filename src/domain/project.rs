//! Project aggregate and graph queries
//!
//! A [`Project`] owns its applications and a name index over them. All
//! relationship queries are answered by scanning the applications at query
//! time; dependencies are never turned into pointers.
//!
//! ```text
//! app1 ──depends on──▶ app2 ──depends on──▶ app3
//!
//! find_applications_that_reference_to(app3, false) = [app2]
//! find_applications_that_reference_to(app3, true)  = [app2, app1]
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use super::{Application, Dependency};
use crate::error::{Result, lookup};

/// Name given to a project built from definitions that declare no project
pub const FULL_REPOSITORY_NAME: &str = "Full Repository";

/// A built architecture model
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,

    applications: Vec<Application>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Project {
    /// Create a project from already merged applications
    ///
    /// # Errors
    ///
    /// Returns `DuplicateApplication` if two applications share a name.
    pub fn new(name: impl Into<String>, applications: Vec<Application>) -> Result<Self> {
        let mut index = HashMap::with_capacity(applications.len());
        for (position, app) in applications.iter().enumerate() {
            if index.insert(app.name.clone(), position).is_some() {
                return Err(lookup::duplicate(&app.name));
            }
        }

        Ok(Self {
            name: name.into(),
            description: None,
            version: None,
            applications,
            index,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Applications in merge order
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Find an application by exact, case-sensitive name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationNotFound` if no application has that name.
    pub fn find_application(&self, name: &str) -> Result<&Application> {
        self.index
            .get(name)
            .map(|&position| &self.applications[position])
            .ok_or_else(|| lookup::not_found(name))
    }

    /// Find every application that declares a dependency on `target`
    ///
    /// With `include_transitive`, applications depending on those are followed
    /// as well, breadth-first. Each application appears at most once. `target`
    /// is part of the result only if it depends on itself, directly or through
    /// a cycle.
    pub fn find_applications_that_reference_to(
        &self,
        target: &Application,
        include_transitive: bool,
    ) -> Vec<&Application> {
        self.walk(&target.name, include_transitive, |name| {
            self.applications
                .iter()
                .filter(|app| app.depends_on(name))
                .collect()
        })
    }

    /// Find the applications that `source` depends on
    ///
    /// References naming no application are skipped. With
    /// `include_transitive`, dependencies of dependencies are followed; as for
    /// dependents, `source` is only returned when a cycle leads back to it.
    pub fn find_dependencies_of(
        &self,
        source: &Application,
        include_transitive: bool,
    ) -> Vec<&Application> {
        self.walk(&source.name, include_transitive, |name| {
            let Ok(app) = self.find_application(name) else {
                return Vec::new();
            };
            app.dependencies
                .iter()
                .filter_map(|dep| self.find_application(&dep.reference).ok())
                .collect()
        })
    }

    /// Every dependency whose reference names no application in this project
    pub fn unresolved_references(&self) -> Vec<(&Application, &Dependency)> {
        self.applications
            .iter()
            .flat_map(|app| {
                app.dependencies
                    .iter()
                    .filter(|dep| !self.contains(&dep.reference))
                    .map(move |dep| (app, dep))
            })
            .collect()
    }

    /// Breadth-first walk from `start` over the edges produced by `neighbours`
    ///
    /// `start` is not marked visited up front, so a self-loop or a cycle back
    /// to it reports it once.
    fn walk<'a, F>(
        &'a self,
        start: &str,
        include_transitive: bool,
        neighbours: F,
    ) -> Vec<&'a Application>
    where
        F: Fn(&str) -> Vec<&'a Application>,
    {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut found = Vec::new();
        let mut queue = VecDeque::from([start.to_string()]);

        while let Some(current) = queue.pop_front() {
            for app in neighbours(&current) {
                if !visited.insert(app.name.as_str()) {
                    continue;
                }
                found.push(app);
                if include_transitive {
                    queue.push_back(app.name.clone());
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchweaveError;

    fn app(name: &str, deps: &[&str]) -> Application {
        deps.iter().fold(Application::new(name), |app, dep| {
            app.with_dependency(Dependency::new(*dep))
        })
    }

    fn names(apps: &[&Application]) -> Vec<String> {
        apps.iter().map(|app| app.name.clone()).collect()
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = Project::new("P", vec![app("app1", &[]), app("app1", &[])]);
        assert!(matches!(
            result,
            Err(ArchweaveError::DuplicateApplication { .. })
        ));
    }

    #[test]
    fn test_find_application() {
        let project = Project::new("P", vec![app("app1", &[]), app("app2", &[])]).unwrap();
        assert_eq!(project.find_application("app2").unwrap().name, "app2");
    }

    #[test]
    fn test_find_application_missing_is_error() {
        let project = Project::new("P", vec![app("app1", &[])]).unwrap();
        let err = project.find_application("App1").unwrap_err();
        assert!(matches!(err, ArchweaveError::ApplicationNotFound { .. }));
    }

    #[test]
    fn test_reverse_dependencies_single_hop() {
        let project =
            Project::new("Project1", vec![app("app1", &["app2"]), app("app2", &[])]).unwrap();
        let app1 = &project.applications()[0];
        let app2 = &project.applications()[1];

        assert_eq!(
            names(&project.find_applications_that_reference_to(app2, false)),
            vec!["app1"]
        );
        assert!(project.find_applications_that_reference_to(app1, false).is_empty());
    }

    #[test]
    fn test_reverse_dependencies_transitive() {
        let project = Project::new(
            "P",
            vec![app("app1", &["app2"]), app("app2", &["app3"]), app("app3", &[])],
        )
        .unwrap();
        let app3 = project.find_application("app3").unwrap();

        assert_eq!(
            names(&project.find_applications_that_reference_to(app3, false)),
            vec!["app2"]
        );
        assert_eq!(
            names(&project.find_applications_that_reference_to(app3, true)),
            vec!["app2", "app1"]
        );
    }

    #[test]
    fn test_reverse_dependencies_cycle_terminates() {
        let project = Project::new("P", vec![app("a", &["b"]), app("b", &["a"])]).unwrap();
        let a = project.find_application("a").unwrap();

        assert_eq!(
            names(&project.find_applications_that_reference_to(a, false)),
            vec!["b"]
        );
        assert_eq!(
            names(&project.find_applications_that_reference_to(a, true)),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_self_dependency_is_its_own_dependent() {
        let project = Project::new("P", vec![app("a", &["a"]), app("b", &["a"])]).unwrap();
        let a = project.find_application("a").unwrap();

        assert_eq!(
            names(&project.find_applications_that_reference_to(a, false)),
            vec!["a", "b"]
        );
        assert_eq!(
            names(&project.find_applications_that_reference_to(a, true)),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_self_dependency_is_its_own_dependency() {
        let project = Project::new("P", vec![app("a", &["a", "b"]), app("b", &[])]).unwrap();
        let a = project.find_application("a").unwrap();

        assert_eq!(names(&project.find_dependencies_of(a, false)), vec!["a", "b"]);
        assert_eq!(names(&project.find_dependencies_of(a, true)), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_references_reported_once() {
        let project =
            Project::new("P", vec![app("app1", &["app2", "app2"]), app("app2", &[])]).unwrap();
        let app2 = project.find_application("app2").unwrap();
        assert_eq!(project.find_applications_that_reference_to(app2, false).len(), 1);
    }

    #[test]
    fn test_forward_dependencies_skip_dangling() {
        let project = Project::new(
            "P",
            vec![
                app("app1", &["app2", "ghost"]),
                app("app2", &["app3"]),
                app("app3", &["app1"]),
            ],
        )
        .unwrap();
        let app1 = project.find_application("app1").unwrap();

        assert_eq!(names(&project.find_dependencies_of(app1, false)), vec!["app2"]);
        assert_eq!(
            names(&project.find_dependencies_of(app1, true)),
            vec!["app2", "app3", "app1"]
        );
    }

    #[test]
    fn test_unresolved_references() {
        let project =
            Project::new("P", vec![app("app1", &["app2", "ghost"]), app("app2", &[])]).unwrap();
        let unresolved = project.unresolved_references();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].0.name, "app1");
        assert_eq!(unresolved[0].1.reference, "ghost");
    }
}
