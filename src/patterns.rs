//! `.gitignore`-style exclusion patterns
//!
//! Patterns are matched with shell-glob semantics against both the entry's
//! base name and its path relative to the walk root. Directories are also
//! tested with a trailing `/`, so `build/` and `build` both hide a `build`
//! directory while only `build` hides a file of that name.

use std::fs;
use std::io;
use std::path::Path;

use glob::Pattern;

/// Name of the pattern file looked up in the walk root.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// A single compiled pattern, keeping the line it came from.
#[derive(Debug, Clone)]
struct IgnoreRule {
    raw: String,
    pattern: Pattern,
}

impl IgnoreRule {
    fn new(raw: &str) -> Self {
        // Invalid globs (e.g. an unclosed `[`) fall back to a literal match.
        let pattern = Pattern::new(raw)
            .or_else(|_| Pattern::new(&Pattern::escape(raw)))
            .unwrap_or_default();
        Self {
            raw: raw.to_string(),
            pattern,
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        self.pattern.matches(candidate)
    }
}

/// Ordered exclusion patterns loaded for a single walk.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRuleSet {
    /// Load patterns from a `.gitignore`-like file.
    ///
    /// A missing file (or a root that is not a directory) yields an empty set. Other read errors are logged and
    /// also yield an empty set, so a broken ignore file never stops a walk.
    pub fn load(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => {
                let rules = Self::parse(&String::from_utf8_lossy(&bytes));
                log::debug!("loaded {} patterns from {}", rules.len(), path.display());
                rules
            }
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring unreadable {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse pattern file content. Lines are trimmed at both ends, then blank
    /// lines and `#` comments are skipped. Inner whitespace is kept.
    pub fn parse(content: &str) -> Self {
        Self::from_patterns(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Build a rule set from patterns in the given order.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: patterns
                .into_iter()
                .map(|p| IgnoreRule::new(p.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pattern strings in file order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.raw.as_str())
    }

    /// Check whether `rel_path` (relative to the walk root) is excluded.
    ///
    /// Any single matching pattern is enough; there is no negation and no
    /// precedence between patterns.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let name = rel_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let full = slash_path(rel_path);

        let mut candidates = vec![name.clone(), full.clone()];
        if is_dir {
            candidates.push(format!("{}/", name));
            candidates.push(format!("{}/", full));
        }

        self.rules
            .iter()
            .any(|rule| candidates.iter().any(|c| rule.matches(c)))
    }
}

/// Join path components with `/` regardless of platform.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
