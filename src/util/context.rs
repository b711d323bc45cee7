//! Global context for Slipway operations.
//!
//! Provides centralized access to configuration paths and project-root
//! discovery. A project root is the directory holding the design file
//! (`Design/Design.xml`); commands search upward from the working
//! directory the way cargo-style tools search for their manifest.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::design::design_file;

/// Project directories for Slipway
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("io", "slipway", "slipway"));

/// Raised when no design file is found in the directory tree.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(
        "no `{}` found in `{}` or any parent directory",
        design_file().display(),
        dir.display()
    )]
    DesignNotFound { dir: PathBuf },
}

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global Slipway data
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        let home = if let Some(dirs) = PROJECT_DIRS.as_ref() {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".slipway")
        };

        Ok(GlobalContext { cwd, home })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the Slipway home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    /// Get the project-local configuration file path.
    pub fn project_config_path(&self, root: &Path) -> PathBuf {
        root.join(".slipway").join("config.toml")
    }

    /// Find the project root (directory containing the design file),
    /// starting from cwd and searching upward.
    pub fn find_project_root(&self) -> Result<PathBuf, ProjectError> {
        let marker = design_file();
        let mut current = self.cwd.clone();
        loop {
            if current.join(&marker).is_file() {
                return Ok(current);
            }
            if !current.pop() {
                return Err(ProjectError::DesignNotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_project;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_context_paths() {
        let ctx = GlobalContext::new().unwrap();
        assert!(ctx.cwd().is_absolute());
        assert!(ctx.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_find_project_root_in_cwd() {
        let tmp = TempDir::new().unwrap();
        create_test_project(tmp.path());

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf()).unwrap();
        assert_eq!(ctx.find_project_root().unwrap(), tmp.path());
    }

    #[test]
    fn test_find_project_root_searches_upward() {
        let tmp = TempDir::new().unwrap();
        create_test_project(tmp.path());

        let nested = tmp.path().join("Device").join("src");
        fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested).unwrap();
        assert_eq!(ctx.find_project_root().unwrap(), tmp.path());
    }

    #[test]
    fn test_find_project_root_not_found() {
        let tmp = TempDir::new().unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf()).unwrap();
        let err = ctx.find_project_root().unwrap_err();
        assert!(matches!(err, ProjectError::DesignNotFound { .. }));
        assert!(err.to_string().contains("Design"));
    }
}
