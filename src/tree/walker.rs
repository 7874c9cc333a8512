//! TreeWalker - depth-first walk producing rendered tree lines

use std::fs;
use std::io;
use std::path::Path;

use crate::error::TreeError;
use crate::patterns::IgnoreRuleSet;

use super::config::TraversalConfig;
use super::filter::EntryFilter;
use super::lines::{RenderedTree, TreeLine};

/// Children of one directory that survived filtering.
#[derive(Debug, Default)]
struct Listing {
    dirs: Vec<String>,
    files: Vec<String>,
    /// Symlinks to directories: never descended or printed, but they keep
    /// their parent from being reported as empty.
    linked_dirs: usize,
}

impl Listing {
    fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty() && self.linked_dirs == 0
    }
}

/// Walks a directory pre-order: a directory's line, then its subdirectories
/// (recursively), then its files.
pub struct TreeWalker {
    max_depth: Option<usize>,
    sort_entries: bool,
    filter: EntryFilter,
}

impl TreeWalker {
    /// Walker with the config's exclusions and depth limit but no ignore patterns.
    pub fn new(config: &TraversalConfig) -> Self {
        let (max_depth, _) = config.effective_max_depth();
        Self {
            max_depth,
            sort_entries: config.sort_entries,
            filter: EntryFilter::new(config.exclusions.clone(), IgnoreRuleSet::default()),
        }
    }

    pub fn with_rules(mut self, rules: IgnoreRuleSet) -> Self {
        self.filter = self.filter.with_rules(rules);
        self
    }

    pub fn walk(&self, root: &Path) -> Result<RenderedTree, TreeError> {
        check_root(root)?;

        let listing = self
            .read_listing(root, Path::new(""))
            .map_err(|source| root_error(root, source))?;

        let mut lines = vec![TreeLine::root()];
        self.emit_contents(root, Path::new(""), 0, listing, &mut lines);
        Ok(RenderedTree::new(lines))
    }

    fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }

    /// Visit a non-root directory. Unreadable directories vanish from the output.
    fn walk_dir(
        &self,
        path: &Path,
        rel: &Path,
        name: &str,
        depth: usize,
        lines: &mut Vec<TreeLine>,
    ) {
        if self.beyond_max_depth(depth) {
            return;
        }

        let listing = match self.read_listing(path, rel) {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("skipping '{}': {}", path.display(), e);
                return;
            }
        };

        lines.push(TreeLine::directory(name, depth));
        self.emit_contents(path, rel, depth, listing, lines);
    }

    fn emit_contents(
        &self,
        path: &Path,
        rel: &Path,
        depth: usize,
        listing: Listing,
        lines: &mut Vec<TreeLine>,
    ) {
        if listing.is_empty() {
            lines.push(TreeLine::empty(depth));
            return;
        }

        for dir in &listing.dirs {
            self.walk_dir(&path.join(dir), &rel.join(dir), dir, depth + 1, lines);
        }

        let last = listing.files.len().saturating_sub(1);
        for (i, file) in listing.files.iter().enumerate() {
            lines.push(TreeLine::file(file, depth, i == last));
        }
    }

    /// Read, split, and filter directory entries.
    fn read_listing(&self, path: &Path, rel: &Path) -> io::Result<Listing> {
        let mut listing = Listing::default();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("skipping entry in '{}': {}", path.display(), e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let rel_path = rel.join(&name);
            let is_link = entry.file_type().is_ok_and(|t| t.is_symlink());
            // fs::metadata follows links, so a link to a directory is filtered as one.
            // Broken links fall through as files.
            let is_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());

            if is_dir {
                if !self.filter.keeps_dir(&rel_path, &name) {
                    log::debug!("excluded directory {}", rel_path.display());
                } else if is_link {
                    log::debug!("not following directory link {}", rel_path.display());
                    listing.linked_dirs += 1;
                } else {
                    listing.dirs.push(name);
                }
            } else if self.filter.keeps_file(&rel_path) {
                listing.files.push(name);
            } else {
                log::debug!("excluded file {}", rel_path.display());
            }
        }

        if self.sort_entries {
            listing.dirs.sort();
            listing.files.sort();
        }

        Ok(listing)
    }
}

/// Ensure the root exists and is a directory.
fn check_root(root: &Path) -> Result<(), TreeError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TreeError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(root_error(root, e)),
    }
}

fn root_error(root: &Path, source: io::Error) -> TreeError {
    if source.kind() == io::ErrorKind::NotFound {
        TreeError::RootNotFound {
            path: root.to_path_buf(),
        }
    } else {
        TreeError::RootNotReadable {
            path: root.to_path_buf(),
            source,
        }
    }
}
