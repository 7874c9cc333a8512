//! Test utilities for building temporary directory trees.
//!
//! Only compiled with the `test-utils` feature (tests and benchmarks).

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree, removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

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

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a `.gitignore` at the root with one pattern per line.
    pub fn gitignore(&self, patterns: &[&str]) -> PathBuf {
        self.add_file(".gitignore", &format!("{}\n", patterns.join("\n")))
    }

    /// Populate a wide, nested tree: `dirs` directories per level, `depth`
    /// levels deep, `files` files in each directory.
    pub fn populate(&self, dirs: usize, depth: usize, files: usize) {
        fn fill(base: &Path, dirs: usize, depth: usize, files: usize) {
            for f in 0..files {
                fs::write(base.join(format!("file_{}.txt", f)), "")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..dirs {
                let sub = base.join(format!("dir_{}", d));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, dirs, depth - 1, files);
            }
        }
        fill(self.dir.path(), dirs, depth, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
