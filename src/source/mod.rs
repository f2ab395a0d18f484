//! Definition source reading
//!
//! This module turns folders of definition files into ordered [`RawRecord`]s:
//! - Single folder: every `.yml`, `.yaml` and `.json` file below it
//! - [`Layout`]: several folders read one after another
//!
//! ## Read Order
//!
//! Merging is last-wins, so read order decides the result. Files in a folder
//! are read in byte-wise order of their forward-slash path relative to that
//! folder:
//!
//! ```text
//! a.yml
//! b.yml
//! b/a.yml     ('.' sorts before '/')
//! c/z.json
//! ```
//!
//! A layout reads its folders in the order they were given.
//!
//! ## Module Organization
//!
//! - `directory.rs`: Discovery and decoding of one folder
//! - `layout.rs`: Multi-folder layouts

pub mod directory;
pub mod layout;

pub use directory::{discover_definition_files, read_directory};
pub use layout::Layout;

use crate::config::RawRecord;
use crate::error::ArchweaveError;

/// Records read from one or more folders, plus per-file errors
#[derive(Debug, Default)]
pub struct SourceReport {
    /// Records in canonical read order
    pub records: Vec<RawRecord>,

    /// Files that could not be read or decoded; those files were skipped
    pub errors: Vec<ArchweaveError>,
}

impl SourceReport {
    pub(crate) fn extend(&mut self, other: SourceReport) {
        self.records.extend(other.records);
        self.errors.extend(other.errors);
    }
}
