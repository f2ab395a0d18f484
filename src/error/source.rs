//! Definition source errors

use super::ArchweaveError;

/// Creates a no definitions found error
pub fn no_files(path: impl Into<String>) -> ArchweaveError {
    ArchweaveError::NoDefinitionsFound { path: path.into() }
}

/// Creates a source read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ArchweaveError {
    ArchweaveError::SourceReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
