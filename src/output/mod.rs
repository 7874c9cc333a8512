//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Terminal printer with optional colors
//! - `json` - JSON output
//! - `file` - Persisting the plain text

mod config;
mod file;
mod json;
mod tree;

pub use config::OutputConfig;
pub use file::write_rendered;
pub use json::{print_json, to_json};
pub use tree::TreePrinter;

use std::path::Path;

use crate::tree::RenderedTree;

/// One-line status summary, e.g. `3 directories, 7 files`.
pub fn summary(tree: &RenderedTree, saved_to: Option<&Path>) -> String {
    let mut line = format!(
        "{} {}, {} {}",
        tree.dir_count(),
        plural(tree.dir_count(), "directory", "directories"),
        tree.file_count(),
        plural(tree.file_count(), "file", "files"),
    );
    if let Some(path) = saved_to {
        line.push_str(&format!(", saved to {}", path.display()));
    }
    line
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeLine;

    #[test]
    fn test_summary() {
        let tree = RenderedTree::new(vec![
            TreeLine::root(),
            TreeLine::directory("sub", 1),
            TreeLine::file("a", 1, false),
            TreeLine::file("b", 1, true),
        ]);
        assert_eq!(summary(&tree, None), "1 directory, 2 files");
        assert_eq!(
            summary(&tree, Some(Path::new("out.txt"))),
            "1 directory, 2 files, saved to out.txt"
        );
    }
}
