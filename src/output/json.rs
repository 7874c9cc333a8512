//! JSON output formatting

use std::io;

use crate::tree::RenderedTree;

/// Print the rendered lines as pretty-printed JSON to stdout.
pub fn print_json(tree: &RenderedTree) -> io::Result<()> {
    println!("{}", to_json(tree)?);
    Ok(())
}

pub fn to_json(tree: &RenderedTree) -> io::Result<String> {
    serde_json::to_string_pretty(tree).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeLine;

    #[test]
    fn test_to_json() {
        let tree = RenderedTree::new(vec![TreeLine::root(), TreeLine::file("a.txt", 0, true)]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&tree).unwrap()).unwrap();
        let lines = value["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "root");
        assert_eq!(lines[1]["prefix"], "└── ");
        assert_eq!(lines[1]["label"], "a.txt");
    }
}
