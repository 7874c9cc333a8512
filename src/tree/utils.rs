//! Shared glyphs and helpers for tree walking

pub const ROOT_LABEL: &str = "./";
pub const EMPTY_MARKER: &str = "(empty)";
pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE: &str = "│   ";

/// Indentation for `levels` ancestors.
pub fn indent(levels: usize) -> String {
    PIPE.repeat(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "│   │   ");
    }
}
