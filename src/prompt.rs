//! Prompt file loading.

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the whole prompt file into memory, exactly as stored.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let prompt = fs::read_to_string(path).map_err(|e| Error::prompt_file(path, e))?;
    tracing::debug!(path = %path.display(), chars = prompt.chars().count(), "prompt loaded");
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_contents_preserved_exactly() {
        let content = "Line one\n\n  indented — ünïcode ✓\r\nno trailing newline";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        assert_eq!(load(file.path()).unwrap(), content);
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(load(file.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = load(&path).unwrap_err();
        assert!(err.is_startup());
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(matches!(load(file.path()), Err(Error::PromptFile { .. })));
    }
}
