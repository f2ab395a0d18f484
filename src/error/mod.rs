//! Error types and handling for archweave
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error area:
//! - [`source`]: Definition source errors (missing folders, unreadable files)
//! - [`record`]: Malformed individual definition records
//! - [`reference`]: Dependency references naming unknown applications
//! - [`lookup`]: Queries against a built project
//! - [`output`]: Rendering a built project for the caller

pub mod lookup;
pub mod output;
pub mod record;
pub mod reference;
pub mod source;


use miette::Diagnostic;
use thiserror::Error;

/// How an error affects project construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Aborts construction; no project is returned
    Fatal,
    /// A single record was skipped
    Record,
    /// A dependency points at an application that does not exist
    Reference,
    /// A query on a built project failed
    Lookup,
    /// A built project could not be rendered
    Output,
}

/// Main error type for archweave operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ArchweaveError {
    // Source errors
    #[error("Could not build repository: No files found in folder {path}")]
    #[diagnostic(
        code(archweave::source::no_files),
        help("Point to a folder that contains .yml, .yaml or .json definition files")
    )]
    NoDefinitionsFound { path: String },

    #[error("Failed to read definition file: {path}: {reason}")]
    #[diagnostic(code(archweave::source::read_failed))]
    SourceReadFailed { path: String, reason: String },

    // Record errors
    #[error("Failed to parse definition file: {path}: {reason}")]
    #[diagnostic(code(archweave::record::parse_failed))]
    DefinitionParseFailed { path: String, reason: String },

    #[error("Application definition in {path} has an empty name")]
    #[diagnostic(
        code(archweave::record::empty_name),
        help("Every application record needs a non-empty 'name'")
    )]
    EmptyApplicationName { path: String },

    #[error("Unknown category '{category}' for application '{application}' in {path}")]
    #[diagnostic(
        code(archweave::record::unknown_category),
        help("Valid categories: core, supporting, generic, external")
    )]
    UnknownCategory {
        application: String,
        category: String,
        path: String,
    },

    #[error("Project '{project}' includes application '{application}' which is not defined")]
    #[diagnostic(code(archweave::record::included_not_found))]
    IncludedApplicationNotFound { project: String, application: String },

    // Reference errors
    #[error("Application '{application}' depends on '{reference}' which is not defined")]
    #[diagnostic(
        code(archweave::reference::dangling),
        help("Define the referenced application or remove the dependency")
    )]
    DanglingReference {
        application: String,
        reference: String,
    },

    // Lookup errors
    #[error("Application '{name}' not found")]
    #[diagnostic(code(archweave::lookup::not_found))]
    ApplicationNotFound { name: String },

    #[error("Application '{name}' is defined more than once")]
    #[diagnostic(code(archweave::lookup::duplicate))]
    DuplicateApplication { name: String },

    // Output errors
    #[error("Failed to serialize {what}: {reason}")]
    #[diagnostic(code(archweave::output::serialize_failed))]
    SerializationFailed { what: String, reason: String },
}

impl ArchweaveError {
    /// Classify this error by its effect on construction
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoDefinitionsFound { .. } => Severity::Fatal,
            Self::SourceReadFailed { .. }
            | Self::DefinitionParseFailed { .. }
            | Self::EmptyApplicationName { .. }
            | Self::UnknownCategory { .. }
            | Self::IncludedApplicationNotFound { .. } => Severity::Record,
            Self::DanglingReference { .. } => Severity::Reference,
            Self::ApplicationNotFound { .. } | Self::DuplicateApplication { .. } => {
                Severity::Lookup
            }
            Self::SerializationFailed { .. } => Severity::Output,
        }
    }

    /// Whether this error aborts construction regardless of strictness
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl From<serde_json::Error> for ArchweaveError {
    fn from(err: serde_json::Error) -> Self {
        output::serialize_failed("JSON output", err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArchweaveError>;
