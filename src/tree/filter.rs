//! Entry filtering for tree walking

use std::path::Path;

use crate::patterns::IgnoreRuleSet;

use super::config::ExclusionConfig;

/// Combines the static directory exclusions with the loaded ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    exclusions: ExclusionConfig,
    rules: IgnoreRuleSet,
}

impl EntryFilter {
    pub fn new(exclusions: ExclusionConfig, rules: IgnoreRuleSet) -> Self {
        Self { exclusions, rules }
    }

    pub fn with_rules(mut self, rules: IgnoreRuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check if a child directory should be walked. `rel_path` is relative to the root.
    pub fn keeps_dir(&self, rel_path: &Path, name: &str) -> bool {
        !self.exclusions.contains(name) && !self.rules.is_excluded(rel_path, true)
    }

    /// Check if a file should be listed.
    pub fn keeps_file(&self, rel_path: &Path) -> bool {
        !self.rules.is_excluded(rel_path, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_names_apply_to_dirs_only() {
        let filter = EntryFilter::new(
            ["node_modules"].into_iter().collect(),
            IgnoreRuleSet::default(),
        );
        assert!(!filter.keeps_dir(Path::new("node_modules"), "node_modules"));
        assert!(!filter.keeps_dir(Path::new("web/node_modules"), "node_modules"));
        assert!(filter.keeps_file(Path::new("node_modules")));
    }

    #[test]
    fn test_rules_apply_to_both() {
        let filter = EntryFilter::new(
            ExclusionConfig::empty(),
            IgnoreRuleSet::from_patterns(["dist", "*.log"]),
        );
        assert!(!filter.keeps_dir(Path::new("dist"), "dist"));
        assert!(!filter.keeps_file(Path::new("a/b.log")));
        assert!(filter.keeps_file(Path::new("a/b.txt")));
        assert!(filter.keeps_dir(Path::new("src"), "src"));
    }
}
