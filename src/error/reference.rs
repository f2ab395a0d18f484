//! Dependency reference errors

use super::ArchweaveError;

/// Creates a dangling reference error
pub fn dangling(application: impl Into<String>, reference: impl Into<String>) -> ArchweaveError {
    ArchweaveError::DanglingReference {
        application: application.into(),
        reference: reference.into(),
    }
}
