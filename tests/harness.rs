//! Test harness for dirtree integration tests

#![allow(dead_code)]

use std::process::Command;

pub use dirtree::test_utils::TestDir;

/// Run the dirtree binary in `dir`, returning (stdout, stderr, success).
pub fn run_dirtree(dir: &std::path::Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_dirtree");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run dirtree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.txt", "hello");
        assert!(file_path.exists());
    }
}
