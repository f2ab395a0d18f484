//! Common test utilities for archweave integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary folder of definition files
#[allow(dead_code)]
pub struct TestDefinitions {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the definitions root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDefinitions {
    /// Create an empty definitions folder
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file below the definitions root, creating parent folders
    pub fn write_file(&self, path: &str, content: &str) -> &Self {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        self
    }

    /// Path of a sub folder, created if missing
    pub fn dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }
}

/// Path to a checked-in fixture folder
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
