//! Configuration types for tree rendering

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::TreeError;

/// Directory names skipped unless the caller supplies their own set.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "venv", "__pycache__", "node_modules"];

/// Directory names that are always skipped, matched exactly against an
/// entry's base name. These are names, not patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionConfig {
    names: BTreeSet<String>,
}

impl ExclusionConfig {
    /// An exclusion set that skips nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        DEFAULT_EXCLUDED_DIRS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionConfig {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Encoding used when persisting the rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-8 prefixed with a byte-order mark, for editors that need it.
    Utf8Bom,
}

impl TextEncoding {
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf8Bom => {
                let mut bytes = Vec::with_capacity(text.len() + 3);
                bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
                bytes.extend_from_slice(text.as_bytes());
                bytes
            }
        }
    }
}

/// Everything a single render needs. Built once, never mutated by the walk.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub root: PathBuf,
    pub exclusions: ExclusionConfig,
    /// `None` means unlimited. Zero is rejected as `InvalidDepth`.
    pub max_depth: Option<usize>,
    /// Load `<root>/.gitignore` and apply its patterns.
    pub use_gitignore: bool,
    /// Also write the rendered text here, replacing existing content.
    pub output_path: Option<PathBuf>,
    pub encoding: TextEncoding,
    /// Sort entries by name instead of keeping filesystem enumeration order.
    pub sort_entries: bool,
}

impl TraversalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionConfig) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = enabled;
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The depth limit actually applied to the walk.
    ///
    /// Returns the limit together with an `InvalidDepth` notice when the
    /// configured value had to be dropped.
    pub fn effective_max_depth(&self) -> (Option<usize>, Option<TreeError>) {
        match self.max_depth {
            Some(0) => (
                None,
                Some(TreeError::InvalidDepth {
                    value: "0".to_string(),
                }),
            ),
            other => (other, None),
        }
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclusions: ExclusionConfig::default(),
            max_depth: None,
            use_gitignore: true,
            output_path: None,
            encoding: TextEncoding::default(),
            sort_entries: false,
        }
    }
}

/// Parse a user-supplied depth. Blank input means unlimited.
pub fn parse_max_depth(input: &str) -> Result<Option<usize>, TreeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<usize>() {
        Ok(depth) if depth >= 1 => Ok(Some(depth)),
        _ => Err(TreeError::InvalidDepth {
            value: input.to_string(),
        }),
    }
}
