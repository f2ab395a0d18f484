//! Definition merging
//!
//! Collapses the raw records of all definition files into one project's worth
//! of applications. Records must arrive in canonical read order; every
//! "last wins" rule below refers to that order.
//!
//! - [`project`]: project records, named variants and included applications
//! - [`application`]: application records grouped by name

pub mod application;
pub mod project;

pub use application::{ApplicationMerger, merge_into, validate_record};
pub use project::{ProjectHeader, merge_project};

use crate::config::{Definition, RawRecord};
use crate::domain::Application;
use crate::error::ArchweaveError;

/// Result of merging all records
#[derive(Debug)]
pub struct MergeOutcome {
    pub header: ProjectHeader,
    pub applications: Vec<Application>,
    pub errors: Vec<ArchweaveError>,
}

/// Merge records into a project header and its applications
///
/// Record errors are collected; the offending records are skipped.
pub fn merge_records(records: Vec<RawRecord>, name_override: Option<&str>) -> MergeOutcome {
    let mut projects = Vec::new();
    let mut merger = ApplicationMerger::new();

    for record in records {
        let origin = record.origin_display();
        match record.definition {
            Definition::Project(def) => projects.push((def, origin)),
            Definition::Application(def) => merger.add(def, &origin),
        }
    }

    let mut header = merge_project(projects, name_override);
    let included = std::mem::take(&mut header.included);

    let (applications, errors) = if included.is_empty() {
        merger.finish()
    } else {
        merger.select(&header.name, included)
    };

    MergeOutcome {
        header,
        applications,
        errors,
    }
}
