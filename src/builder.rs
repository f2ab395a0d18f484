//! Project construction entry points
//!
//! Construction runs in one pass:
//!
//! ```text
//! read sources ──▶ merge records ──▶ assemble Project ──▶ validate references
//!   (fatal if no files)   (record errors)                  (reference errors)
//! ```
//!
//! Record and reference errors are collected and returned next to the
//! project. In strict mode any of them fails the build: the project is dropped
//! and every collected error is returned. A fatal source error always ends the
//! build with that single error.

use std::path::Path;

use crate::config::{BuildOptions, RawRecord};
use crate::domain::Project;
use crate::error::{ArchweaveError, Result};
use crate::merger::merge_records;
use crate::resolver::validate_references;
use crate::source::{Layout, SourceReport};

/// Outcome of a build: the project, if one could be assembled, and all errors
#[derive(Debug)]
#[must_use]
pub struct BuildReport {
    pub project: Option<Project>,
    pub errors: Vec<ArchweaveError>,
}

impl BuildReport {
    fn fatal(error: ArchweaveError) -> Self {
        Self {
            project: None,
            errors: vec![error],
        }
    }

    /// Whether a project was built and no error was collected
    pub fn is_clean(&self) -> bool {
        self.project.is_some() && self.errors.is_empty()
    }

    /// Convert into the project and its non-fatal errors
    ///
    /// # Errors
    ///
    /// Returns the first error if no project was built.
    pub fn into_result(self) -> Result<(Project, Vec<ArchweaveError>)> {
        match self.project {
            Some(project) => Ok((project, self.errors)),
            None => Err(self
                .errors
                .into_iter()
                .next()
                .unwrap_or_else(|| crate::error::source::no_files(""))),
        }
    }
}

/// Build the project defined in `path`
pub fn build_project(path: impl AsRef<Path>, strict: bool) -> BuildReport {
    build_project_with_options(path, &BuildOptions::new(strict))
}

/// Build the project variant called `name` defined in `path`
///
/// If no project record carries that name, `name` becomes the name of the
/// project built from all records. A blank name behaves like
/// [`build_project`].
pub fn build_project_with_name(path: impl AsRef<Path>, name: &str, strict: bool) -> BuildReport {
    build_project_with_options(path, &BuildOptions::new(strict).with_project_name(name))
}

/// Build the project defined in `path` with explicit options
pub fn build_project_with_options(path: impl AsRef<Path>, options: &BuildOptions) -> BuildReport {
    build_project_from_layout(&Layout::single(path.as_ref()), options)
}

/// Build one project from every folder of a layout, read in order
pub fn build_project_from_layout(layout: &Layout, options: &BuildOptions) -> BuildReport {
    match layout.read(&options.exclude) {
        Ok(report) => build_from_source(report, options),
        Err(err) => BuildReport::fatal(err),
    }
}

/// Build a project from records produced by another reader
///
/// `records` must already be in the order they should be merged in.
pub fn build_from_records(records: Vec<RawRecord>, options: &BuildOptions) -> BuildReport {
    build_from_source(
        SourceReport {
            records,
            errors: Vec::new(),
        },
        options,
    )
}

fn build_from_source(source: SourceReport, options: &BuildOptions) -> BuildReport {
    let SourceReport {
        records,
        mut errors,
    } = source;

    let outcome = merge_records(records, options.project_name());
    errors.extend(outcome.errors);

    let header = outcome.header;
    let project = match Project::new(header.name, outcome.applications) {
        Ok(project) => project
            .with_description(header.description)
            .with_version(header.version),
        Err(err) => return BuildReport::fatal(err),
    };

    errors.extend(validate_references(&project));

    if options.strict && !errors.is_empty() {
        return BuildReport {
            project: None,
            errors,
        };
    }

    BuildReport {
        project: Some(project),
        errors,
    }
}
