//! Multi-folder layouts

use std::path::{Path, PathBuf};

use super::{SourceReport, read_directory};
use crate::error::Result;

/// An ordered list of definition folders read as one source
///
/// Folders are read in the order given; within a folder the usual lexical
/// order applies. A later folder therefore overrides an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    directories: Vec<PathBuf>,
}

impl Layout {
    pub fn new<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }

    /// Single-folder layout
    pub fn single(directory: impl Into<PathBuf>) -> Self {
        Self::new([directory])
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Read every folder of the layout in order
    ///
    /// # Errors
    ///
    /// Returns `NoDefinitionsFound` for the first folder that is missing or
    /// holds no definition files, or for an empty layout.
    pub fn read(&self, exclude: &[String]) -> Result<SourceReport> {
        if self.directories.is_empty() {
            return Err(crate::error::source::no_files(""));
        }

        let mut report = SourceReport::default();
        for directory in &self.directories {
            report.extend(read_directory(directory, exclude)?);
        }
        Ok(report)
    }

    /// Display string of the layout's folders
    pub fn display(&self) -> String {
        self.directories
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<&Path> for Layout {
    fn from(path: &Path) -> Self {
        Self::single(path)
    }
}
