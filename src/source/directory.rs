//! Reading the definition files of one folder

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::SourceReport;
use crate::config::{DefinitionFormat, definition::parse_definitions};
use crate::error::{Result, source};
use crate::path_utils;

/// Find definition files below `root` in canonical read order
///
/// Hidden files and directories are skipped, as are files whose relative path
/// matches one of the `exclude` globs. A missing `root` yields no files.
pub fn discover_definition_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<(String, PathBuf)> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| DefinitionFormat::from_path(e.path()).is_some())
        .map(|e| {
            let key = path_utils::relative_key(e.path(), root);
            (key, e.into_path())
        })
        .filter(|(key, _)| !exclude.iter().any(|p| path_utils::matches_glob(p, key)))
        .collect();

    files.sort_by(|a, b| a.0.cmp(&b.0));
    files.into_iter().map(|(_, path)| path).collect()
}

/// Read and decode all definition files below `root`
///
/// Files that cannot be read or decoded are reported in
/// [`SourceReport::errors`] and skipped.
///
/// # Errors
///
/// Returns `NoDefinitionsFound` if `root` is missing or contains no
/// definition files.
pub fn read_directory(root: &Path, exclude: &[String]) -> Result<SourceReport> {
    let files = discover_definition_files(root, exclude);
    if files.is_empty() {
        return Err(source::no_files(root.display().to_string()));
    }

    let mut report = SourceReport::default();
    for file in files {
        match read_file(&file) {
            Ok(records) => report.records.extend(records),
            Err(err) => report.errors.push(err),
        }
    }

    Ok(report)
}

fn read_file(path: &Path) -> Result<Vec<crate::config::RawRecord>> {
    let Some(format) = DefinitionFormat::from_path(path) else {
        return Ok(Vec::new());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| source::read_failed(path.display().to_string(), e.to_string()))?;

    parse_definitions(&content, format, path)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
