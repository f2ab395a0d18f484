//! Cross-platform path utilities
//!
//! Definition files are ordered and matched by their forward-slash path
//! relative to the scanned folder, so results do not depend on the platform's
//! separator.

use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Forward-slash path of `path` relative to `root`
///
/// Falls back to the full path when `path` is not below `root`.
pub fn relative_key(path: &Path, root: &Path) -> String {
    to_forward_slashes(path.strip_prefix(root).unwrap_or(path))
}

/// Check if a glob pattern matches a relative file path
///
/// An invalid pattern only matches the identical path.
pub fn matches_glob(pattern: &str, relative_path: &str) -> bool {
    let normalized = relative_path.replace('\\', "/");
    match Glob::new(pattern) {
        Ok(glob) => glob.matched(&CandidatePath::from(normalized.as_str())).is_some(),
        Err(_) => pattern == normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_forward_slashes_unix() {
        assert_eq!(to_forward_slashes(Path::new("a/b/c.yml")), "a/b/c.yml");
    }

    #[test]
    fn test_to_forward_slashes_windows() {
        assert_eq!(to_forward_slashes(Path::new("a\\b\\c.yml")), "a/b/c.yml");
    }

    #[test]
    fn test_relative_key() {
        let root = Path::new("/defs");
        assert_eq!(relative_key(Path::new("/defs/b/a.yml"), root), "b/a.yml");
        assert_eq!(relative_key(Path::new("/other/a.yml"), root), "/other/a.yml");
    }

    #[test]
    fn test_matches_glob() {
        assert!(matches_glob("drafts/**", "drafts/app.yml"));
        assert!(matches_glob("**/*.json", "nested/dir/app.json"));
        assert!(!matches_glob("drafts/**", "apps/app.yml"));
    }

    #[test]
    fn test_matches_glob_invalid_pattern_falls_back_to_exact() {
        assert!(matches_glob("a/{b", "a/{b"));
        assert!(!matches_glob("a/{b", "a/b"));
    }
}
