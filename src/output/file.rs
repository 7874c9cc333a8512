//! Persisting rendered text to disk

use std::fs;
use std::io;
use std::path::Path;

use crate::tree::TextEncoding;

/// Write `text` to `path`, replacing any existing content.
pub fn write_rendered(path: &Path, text: &str, encoding: TextEncoding) -> io::Result<()> {
    fs::write(path, encoding.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content").unwrap();
        write_rendered(&path, "./", TextEncoding::Utf8).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "./");
    }

    #[test]
    fn test_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        assert!(write_rendered(&path, "./", TextEncoding::Utf8).is_err());
    }
}
