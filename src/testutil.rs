//! Test utilities for setting up conversion environments.
//!
//! This module provides a `TestFixture` builder that owns a temporary
//! directory with an input resource file and an output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::colorset::{COLORSET_EXTENSION, CONTENTS_FILE_NAME};

/// Test fixture for an isolated conversion run.
pub struct TestFixture {
    /// Root temp directory (holds everything).
    _root: TempDir,
    /// Path of the input resource file (may not exist yet).
    input_path: PathBuf,
    /// Output directory for colorsets.
    output_dir: PathBuf,
}

impl TestFixture {
    /// Create a fixture with an empty output directory and no input file.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let input_path = root.path().join("colors.xml");
        let output_dir = root.path().join("Assets.xcassets");
        fs::create_dir_all(&output_dir).expect("create output dir");

        Self {
            _root: root,
            input_path,
            output_dir,
        }
    }

    /// Write the input resource file.
    pub fn with_resources(self, contents: &str) -> Self {
        fs::write(&self.input_path, contents).expect("write resources");
        self
    }

    /// Get the input resource file path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Get the output directory path.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Read the `Contents.json` of a generated colorset.
    pub fn read_contents(&self, name: &str) -> Option<String> {
        let path = self
            .output_dir
            .join(format!("{name}.{COLORSET_EXTENSION}"))
            .join(CONTENTS_FILE_NAME);
        fs::read_to_string(path).ok()
    }

    /// List the entries of the output directory, sorted.
    pub fn colorset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.output_dir)
            .expect("read output dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_fixture() {
        let fixture = TestFixture::new();
        assert!(fixture.output_dir().is_dir());
        assert!(!fixture.input_path().exists());
        assert!(fixture.colorset_names().is_empty());
    }

    #[test]
    fn writes_resources() {
        let fixture = TestFixture::new().with_resources("<resources/>");
        let contents = fs::read_to_string(fixture.input_path()).expect("read input");
        assert_eq!(contents, "<resources/>");
    }
}
