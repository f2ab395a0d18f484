//! Application-level merge
//!
//! Records are grouped by name, in order of first appearance. Within a group:
//!
//! ```text
//! category, technology, summary, ...   last record that sets the field wins
//! properties                           merged per key, last record wins
//! dependencies                         concatenated in read order
//! ```

use std::collections::HashMap;

use crate::config::ApplicationDefinition;
use crate::domain::{Application, Category};
use crate::error::{ArchweaveError, Result, record};

/// Check a record before it takes part in a merge
///
/// Returns the parsed category, `None` if the record does not set one.
///
/// # Errors
///
/// Returns `EmptyApplicationName` or `UnknownCategory`.
pub fn validate_record(def: &ApplicationDefinition, origin: &str) -> Result<Option<Category>> {
    if def.name.trim().is_empty() {
        return Err(record::empty_name(origin));
    }

    match def.category.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Category::parse(raw)
            .map(Some)
            .ok_or_else(|| record::unknown_category(&def.name, raw, origin)),
    }
}

/// Merge one validated record into an application
pub fn merge_into(
    target: &mut Application,
    def: ApplicationDefinition,
    category: Option<Category>,
) {
    let ApplicationDefinition {
        name: _,
        category: _,
        technology,
        summary,
        description,
        group,
        team,
        properties,
        dependencies,
    } = def;

    if let Some(category) = category {
        target.category = category;
    }
    overwrite(&mut target.technology, technology);
    overwrite(&mut target.summary, summary);
    overwrite(&mut target.description, description);
    overwrite(&mut target.group, group);
    overwrite(&mut target.team, team);
    target.properties.extend(properties);
    target
        .dependencies
        .extend(dependencies.into_iter().map(Into::into));
}

fn overwrite(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Collects application records and merges them by name
#[derive(Debug, Default)]
pub struct ApplicationMerger {
    applications: Vec<Application>,
    index: HashMap<String, usize>,
    errors: Vec<ArchweaveError>,
}

impl ApplicationMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; invalid records are recorded as errors and skipped
    pub fn add(&mut self, def: ApplicationDefinition, origin: &str) {
        let category = match validate_record(&def, origin) {
            Ok(category) => category,
            Err(err) => {
                self.errors.push(err);
                return;
            }
        };

        let position = match self.index.get(&def.name) {
            Some(&position) => position,
            None => {
                self.applications.push(Application::new(def.name.clone()));
                let position = self.applications.len() - 1;
                self.index.insert(def.name.clone(), position);
                position
            }
        };

        merge_into(&mut self.applications[position], def, category);
    }

    /// Restrict the merged applications to the included ones
    ///
    /// Applications are returned in order of first inclusion, each with every
    /// override applied in order. Overrides naming an unknown application are
    /// reported and skipped.
    pub fn select(
        mut self,
        project: &str,
        included: Vec<(ApplicationDefinition, String)>,
    ) -> (Vec<Application>, Vec<ArchweaveError>) {
        let mut slots: Vec<Option<Application>> =
            self.applications.into_iter().map(Some).collect();
        let mut selected: Vec<Application> = Vec::new();
        let mut selected_index: HashMap<String, usize> = HashMap::new();

        for (def, origin) in included {
            let category = match validate_record(&def, &origin) {
                Ok(category) => category,
                Err(err) => {
                    self.errors.push(err);
                    continue;
                }
            };

            let position = if let Some(&position) = selected_index.get(&def.name) {
                position
            } else {
                let Some(app) = self
                    .index
                    .get(&def.name)
                    .and_then(|&slot| slots[slot].take())
                else {
                    self.errors.push(record::included_not_found(project, &def.name));
                    continue;
                };
                selected.push(app);
                selected_index.insert(def.name.clone(), selected.len() - 1);
                selected.len() - 1
            };

            merge_into(&mut selected[position], def, category);
        }

        (selected, self.errors)
    }

    /// All merged applications in order of first appearance
    pub fn finish(self) -> (Vec<Application>, Vec<ArchweaveError>) {
        (self.applications, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyDefinition;

    fn def(name: &str) -> ApplicationDefinition {
        ApplicationDefinition::named(name)
    }

    fn with_props(name: &str, props: &[(&str, &str)]) -> ApplicationDefinition {
        let mut def = def(name);
        for (k, v) in props {
            def.properties.insert((*k).to_string(), (*v).to_string());
        }
        def
    }

    #[test]
    fn test_properties_last_wins_per_key() {
        let mut merger = ApplicationMerger::new();
        merger.add(with_props("app1", &[("env", "dev"), ("git", "here")]), "a.yml");
        merger.add(with_props("app1", &[("env", "prod")]), "b.yml");
        merger.add(with_props("app1", &[("owner", "team-a")]), "c.yml");

        let (apps, errors) = merger.finish();
        assert!(errors.is_empty());
        assert_eq!(apps.len(), 1);
        let props = &apps[0].properties;
        assert_eq!(props["env"], "prod");
        assert_eq!(props["git"], "here");
        assert_eq!(props["owner"], "team-a");
    }

    #[test]
    fn test_scalars_last_set_wins() {
        let mut first = def("app1");
        first.technology = Some("java".to_string());
        first.category = Some("core".to_string());
        first.team = Some("a".to_string());
        let mut second = def("app1");
        second.technology = Some("rust".to_string());

        let mut merger = ApplicationMerger::new();
        merger.add(first, "a.yml");
        merger.add(second, "b.yml");

        let (apps, _) = merger.finish();
        assert_eq!(apps[0].technology.as_deref(), Some("rust"));
        assert_eq!(apps[0].category, Category::Core);
        assert_eq!(apps[0].team.as_deref(), Some("a"));
    }

    #[test]
    fn test_dependencies_concatenate_with_duplicates() {
        let mut first = def("app1");
        first.dependencies.push(DependencyDefinition::new("app2"));
        let mut second = def("app1");
        second.dependencies.push(DependencyDefinition::new("app3"));
        second.dependencies.push(DependencyDefinition::new("app2"));

        let mut merger = ApplicationMerger::new();
        merger.add(first, "a.yml");
        merger.add(second, "b.yml");

        let (apps, _) = merger.finish();
        let refs: Vec<&str> = apps[0]
            .dependencies
            .iter()
            .map(|d| d.reference.as_str())
            .collect();
        assert_eq!(refs, vec!["app2", "app3", "app2"]);
    }

    #[test]
    fn test_merging_record_with_itself_is_idempotent() {
        let mut record = with_props("app1", &[("env", "dev")]);
        record.technology = Some("go".to_string());
        record.category = Some("supporting".to_string());

        let mut once = ApplicationMerger::new();
        once.add(record.clone(), "a.yml");
        let mut twice = ApplicationMerger::new();
        twice.add(record.clone(), "a.yml");
        twice.add(record, "a.yml");

        assert_eq!(once.finish().0, twice.finish().0);
    }

    #[test]
    fn test_applications_keep_first_seen_order() {
        let mut merger = ApplicationMerger::new();
        merger.add(def("b"), "1.yml");
        merger.add(def("a"), "2.yml");
        merger.add(def("b"), "3.yml");

        let (apps, _) = merger.finish();
        let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut merger = ApplicationMerger::new();
        merger.add(def("app"), "1.yml");
        merger.add(def("App"), "2.yml");
        assert_eq!(merger.finish().0.len(), 2);
    }

    #[test]
    fn test_empty_name_is_reported_and_skipped() {
        let mut merger = ApplicationMerger::new();
        merger.add(def("  "), "broken.yml");
        merger.add(def("app1"), "ok.yml");

        let (apps, errors) = merger.finish();
        assert_eq!(apps.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ArchweaveError::EmptyApplicationName { .. }
        ));
    }

    #[test]
    fn test_unknown_category_is_reported_and_skipped() {
        let mut bad = def("app1");
        bad.category = Some("shiny".to_string());
        bad.technology = Some("cobol".to_string());

        let mut merger = ApplicationMerger::new();
        merger.add(def("app1"), "a.yml");
        merger.add(bad, "b.yml");

        let (apps, errors) = merger.finish();
        assert!(apps[0].technology.is_none());
        assert!(matches!(errors[0], ArchweaveError::UnknownCategory { .. }));
    }

    #[test]
    fn test_select_applies_overrides_in_order() {
        let mut merger = ApplicationMerger::new();
        merger.add(with_props("domain", &[("git", "here")]), "apps.yml");
        merger.add(def("web"), "apps.yml");
        merger.add(def("unused"), "apps.yml");

        let mut first = def("domain");
        first.technology = Some("scala".to_string());
        let mut second = def("domain");
        second.technology = Some("play".to_string());
        let included = vec![
            (def("web"), "p.yml".to_string()),
            (first, "p.yml".to_string()),
            (second, "p.yml".to_string()),
        ];

        let (apps, errors) = merger.select("P", included);
        assert!(errors.is_empty());
        let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["web", "domain"]);
        assert_eq!(apps[1].technology.as_deref(), Some("play"));
        assert_eq!(apps[1].properties["git"], "here");
    }

    #[test]
    fn test_select_reports_unknown_inclusion() {
        let mut merger = ApplicationMerger::new();
        merger.add(def("app1"), "apps.yml");

        let (apps, errors) = merger.select("P", vec![(def("ghost"), "p.yml".to_string())]);
        assert!(apps.is_empty());
        assert!(matches!(
            errors[0],
            ArchweaveError::IncludedApplicationNotFound { .. }
        ));
    }
}
