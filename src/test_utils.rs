//! Test utilities shared across test modules
//!
//! This module provides common helper functions for testing, avoiding duplication
//! across multiple test suites.

use crate::paths::Paths;
use std::fs;
use tempfile::TempDir;

/// Create a Paths struct for testing using a temporary directory
///
/// The installation root is created empty, mimicking a fresh /usr/local/go.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    let paths = Paths::new(temp_dir.path().join("go"));
    fs::create_dir_all(&paths.root_dir).unwrap();
    paths
}

/// Create `go<version>/bin` directories under the installation root
pub fn install_versions(paths: &Paths, versions: &[&str]) {
    for version in versions {
        fs::create_dir_all(paths.version_dir(version).join("bin")).unwrap();
    }
}

/// Point the active symlink at an installed version directly
pub fn link_active(paths: &Paths, version: &str) {
    std::os::unix::fs::symlink(paths.version_dir(version), &paths.active_link).unwrap();
}
