//! Project lookup errors

use super::ArchweaveError;

/// Creates an application not found error
pub fn not_found(name: impl Into<String>) -> ArchweaveError {
    ArchweaveError::ApplicationNotFound { name: name.into() }
}

/// Creates a duplicate application error
pub fn duplicate(name: impl Into<String>) -> ArchweaveError {
    ArchweaveError::DuplicateApplication { name: name.into() }
}
