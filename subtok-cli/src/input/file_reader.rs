//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reader that decodes input as UTF-8, replacing invalid sequences
pub struct FileReader;

impl FileReader {
    /// Read a file as text.
    ///
    /// Invalid UTF-8 becomes U+FFFD so the segmenter always sees valid text.
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::decode(bytes, &path.display().to_string()))
    }

    /// Read standard input to the end
    pub fn read_stdin() -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read from stdin")?;
        Ok(Self::decode(bytes, "<stdin>"))
    }

    fn decode(bytes: Vec<u8>, name: &str) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{name} is not valid UTF-8; replacing invalid sequences");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_utf8_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("utf8.txt");

        let content = "Привет 世界! 🌍";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");

        fs::write(&file_path, b"caf\xe9").unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, "caf\u{FFFD}");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
    }
}
