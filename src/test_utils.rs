//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file and set its permission bits.
    pub fn add_file_with_mode(&self, path: &str, content: &str, mode: u32) -> PathBuf {
        let full_path = self.add_file(path, content);
        self.set_mode(path, mode);
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Set permission bits on an existing path.
    pub fn set_mode(&self, path: &str, mode: u32) {
        fs::set_permissions(self.dir.path().join(path), fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }

    /// Fill the tree with `width` subdirectories per level, `depth` levels
    /// deep, and `files` files in every directory.
    pub fn populate(&self, depth: usize, width: usize, files: usize) {
        fn fill(dir: &Path, depth: usize, width: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{f}.txt")), "content")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                let sub = dir.join(format!("dir_{d}"));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width, files);
            }
        }
        fill(self.dir.path(), depth, width, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
