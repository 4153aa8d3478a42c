use crate::error::{ComposeGenError, ConfigError};
use std::fs;
use std::path::Path;

/// Reads file content safely with size limits
pub fn read_file_safe(path: &Path, max_size: u64) -> Result<String, ComposeGenError> {
    let metadata = fs::metadata(path)?;

    if !metadata.is_file() {
        return Err(ConfigError::InvalidFile {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(ConfigError::InvalidFile {
            path: path.to_path_buf(),
            reason: format!("file too large ({} bytes, limit {})", metadata.len(), max_size),
        }
        .into());
    }

    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_safe() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("small.toml");
        fs::write(&path, "key = 1").unwrap();

        assert_eq!(read_file_safe(&path, 1024).unwrap(), "key = 1");
    }

    #[test]
    fn test_read_file_safe_rejects_large_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.toml");
        fs::write(&path, "x".repeat(2048)).unwrap();

        let err = read_file_safe(&path, 1024).unwrap_err();
        assert!(matches!(err, ComposeGenError::Config(ConfigError::InvalidFile { .. })));
    }

    #[test]
    fn test_read_file_safe_rejects_directories() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_file_safe(temp_dir.path(), 1024).unwrap_err();
        assert!(matches!(err, ComposeGenError::Config(ConfigError::InvalidFile { .. })));
    }
}
