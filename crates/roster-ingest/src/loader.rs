//! Raw roster loading from disk or memory.

use std::fs;
use std::path::{Path, PathBuf};

use roster_model::{Result, RosterError};

/// Maximum file size for roster loading (500 MB default).
pub const MAX_ROSTER_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Supplies the raw text of a roster.
pub trait RawLoader {
    fn load(&self) -> Result<String>;
}

/// Loads a roster file from disk.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    max_size: u64,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_size: MAX_ROSTER_FILE_SIZE,
        }
    }

    /// Override the size limit.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

impl RawLoader for FileLoader {
    fn load(&self) -> Result<String> {
        check_file_size_with_limit(&self.path, self.max_size)?;
        let bytes = fs::read(&self.path).map_err(|e| file_error(&self.path, e))?;
        let text = decode(&self.path, bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = text.len(),
            "loaded roster file"
        );
        Ok(text)
    }
}

/// Supplies roster text already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    text: String,
}

impl MemoryLoader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RawLoader for MemoryLoader {
    fn load(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(RosterError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Decode file bytes as UTF-8, rejecting UTF-16 and dropping a UTF-8 BOM.
fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(RosterError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(RosterError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| RosterError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

fn file_error(path: &Path, err: std::io::Error) -> RosterError {
    if err.kind() == std::io::ErrorKind::NotFound {
        RosterError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        RosterError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_load_file() {
        let file = create_temp_file(b"Token4|A\nt1|x\n");
        let text = FileLoader::new(file.path()).load().unwrap();
        assert_eq!(text, "Token4|A\nt1|x\n");
    }

    #[test]
    fn test_load_strips_utf8_bom() {
        let file = create_temp_file("\u{feff}Token4\nt1\n".as_bytes());
        let text = FileLoader::new(file.path()).load().unwrap();
        assert_eq!(text, "Token4\nt1\n");
    }

    #[test]
    fn test_load_rejects_utf16() {
        let file = create_temp_file(&[0xFF, 0xFE, b'T', 0x00]);
        let result = FileLoader::new(file.path()).load();
        assert!(matches!(
            result,
            Err(RosterError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let file = create_temp_file(&[b'T', 0xC3, 0x28]);
        let result = FileLoader::new(file.path()).load();
        assert!(matches!(result, Err(RosterError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = FileLoader::new("/nonexistent/roster.psv").load();
        assert!(matches!(result, Err(RosterError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_enforces_size_limit() {
        let file = create_temp_file(b"Token4\nt1\nt2\n");
        let result = FileLoader::new(file.path()).with_max_size(4).load();
        assert!(matches!(
            result,
            Err(RosterError::FileTooLarge { max_size: 4, .. })
        ));
    }

    #[test]
    fn test_memory_loader() {
        let text = MemoryLoader::new("Token4\nt1").load().unwrap();
        assert_eq!(text, "Token4\nt1");
    }
}
