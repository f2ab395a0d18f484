//! Output rendering errors

use super::ArchweaveError;

/// Creates a serialization failed error
pub fn serialize_failed(what: impl Into<String>, reason: impl Into<String>) -> ArchweaveError {
    ArchweaveError::SerializationFailed {
        what: what.into(),
        reason: reason.into(),
    }
}
