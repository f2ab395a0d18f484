//! Definition record errors

use super::ArchweaveError;

/// Creates a definition parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ArchweaveError {
    ArchweaveError::DefinitionParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an empty application name error
pub fn empty_name(path: impl Into<String>) -> ArchweaveError {
    ArchweaveError::EmptyApplicationName { path: path.into() }
}

/// Creates an unknown category error
pub fn unknown_category(
    application: impl Into<String>,
    category: impl Into<String>,
    path: impl Into<String>,
) -> ArchweaveError {
    ArchweaveError::UnknownCategory {
        application: application.into(),
        category: category.into(),
        path: path.into(),
    }
}

/// Creates an included application not found error
pub fn included_not_found(
    project: impl Into<String>,
    application: impl Into<String>,
) -> ArchweaveError {
    ArchweaveError::IncludedApplicationNotFound {
        project: project.into(),
        application: application.into(),
    }
}
