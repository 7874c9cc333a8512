//! Directory tree walking logic
//!
//! `TreeWalker` produces a `RenderedTree` from a `TraversalConfig`. Filtering
//! combines exact directory names (`ExclusionConfig`) with `.gitignore`
//! patterns (`IgnoreRuleSet`), and happens before descending so excluded
//! subtrees are never read.

mod config;
mod filter;
mod lines;
mod utils;
mod walker;

pub use config::{
    DEFAULT_EXCLUDED_DIRS, ExclusionConfig, TextEncoding, TraversalConfig, parse_max_depth,
};
pub use filter::EntryFilter;
pub use lines::{LineKind, RenderedTree, TreeLine};
pub use walker::TreeWalker;
