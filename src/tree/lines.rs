//! Rendered tree line types

use std::fmt;

use serde::Serialize;

use super::utils::{BRANCH, EMPTY_MARKER, LAST_BRANCH, ROOT_LABEL, indent};

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Root,
    Directory,
    File,
    Empty,
}

/// One row of the rendered tree: glyph prefix plus label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub kind: LineKind,
    pub depth: usize,
    pub prefix: String,
    pub label: String,
}

impl TreeLine {
    pub fn root() -> Self {
        Self {
            kind: LineKind::Root,
            depth: 0,
            prefix: String::new(),
            label: ROOT_LABEL.to_string(),
        }
    }

    /// Directory line at `depth` (>= 1): one indent per ancestor below the root.
    pub fn directory(name: &str, depth: usize) -> Self {
        Self {
            kind: LineKind::Directory,
            depth,
            prefix: format!("{}{}", indent(depth.saturating_sub(1)), BRANCH),
            label: format!("{}/", name),
        }
    }

    /// File line inside a directory at `dir_depth`.
    pub fn file(name: &str, dir_depth: usize, is_last: bool) -> Self {
        let glyph = if is_last { LAST_BRANCH } else { BRANCH };
        Self {
            kind: LineKind::File,
            depth: dir_depth + 1,
            prefix: format!("{}{}", indent(dir_depth), glyph),
            label: name.to_string(),
        }
    }

    /// Marker for a directory at `dir_depth` with nothing left after filtering.
    pub fn empty(dir_depth: usize) -> Self {
        Self {
            kind: LineKind::Empty,
            depth: dir_depth + 1,
            prefix: format!("{}{}", indent(dir_depth), BRANCH),
            label: EMPTY_MARKER.to_string(),
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.label)
    }
}

/// The finished rendering of one walk, starting with the `./` root line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTree {
    lines: Vec<TreeLine>,
}

impl RenderedTree {
    pub(crate) fn new(lines: Vec<TreeLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn text(&self) -> String {
        self.to_string()
    }

    pub fn dir_count(&self) -> usize {
        self.count(LineKind::Directory)
    }

    pub fn file_count(&self) -> usize {
        self.count(LineKind::File)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
