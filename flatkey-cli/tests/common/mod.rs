//! Common test utilities for CLI integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Sample configuration used across the integration tests.
pub const SAMPLE_CONFIG: &str = r#"{
  "settings": { "a": 1, "b": "name" },
  "otherSettings": { "c": 1.2, "d": { "manyThings": [1, 2, 3] } }
}"#;

/// Writes `contents` to a file named `name` inside `dir` and returns its path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test fixture");
    path
}
