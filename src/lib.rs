//! dirtree - render a directory as a text tree, honoring .gitignore patterns

pub mod error;
pub mod output;
pub mod patterns;
pub mod render;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, TreePrinter, print_json, summary};
pub use patterns::{GITIGNORE_FILE, IgnoreRuleSet};
pub use render::{RenderOutcome, render_tree};
pub use tree::{
    ExclusionConfig, RenderedTree, TextEncoding, TraversalConfig, TreeLine, TreeWalker,
    parse_max_depth,
};
