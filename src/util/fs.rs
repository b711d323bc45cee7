//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Calling again on an existing directory is fine.
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_read_to_string_error_names_path() {
        let err = read_to_string(Path::new("/nonexistent/slipway-test")).unwrap_err();
        assert!(format!("{:#}", err).contains("slipway-test"));
    }
}
