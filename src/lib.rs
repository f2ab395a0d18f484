//! archweave - architecture model builder
//!
//! Builds an in-memory model of a project, its applications and their
//! dependencies from YAML/JSON definition files, merging partial definitions
//! spread over several files, and answers dependency queries over the result.
//!
//! ```rust,no_run
//! let report = archweave::build_project("architecture", false);
//! if let Some(project) = &report.project {
//!     let app2 = project.find_application("app2")?;
//!     for dependent in project.find_applications_that_reference_to(app2, false) {
//!         println!("{} depends on app2", dependent.name);
//!     }
//! }
//! # Ok::<(), archweave::ArchweaveError>(())
//! ```

pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod merger;
pub mod path_utils;
pub mod resolver;
pub mod source;

pub use builder::{
    BuildReport, build_from_records, build_project, build_project_from_layout,
    build_project_with_name, build_project_with_options,
};
pub use config::BuildOptions;
pub use domain::{Application, Category, Dependency, Project};
pub use error::{ArchweaveError, Result, Severity};
pub use source::Layout;
