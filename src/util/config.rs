//! Configuration file support for Slipway.
//!
//! Slipway supports two configuration file locations:
//! - Global: `<config dir>/config.toml` - User-wide defaults
//! - Project: `.slipway/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::fs::read_to_string;

/// Slipway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Configure settings
    pub configure: ConfigureConfig,

    /// Transform utility settings
    pub transform: TransformConfig,
}

/// Settings for the cmake configure step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigureConfig {
    /// Default build type (e.g., Debug, Release)
    pub build_type: Option<String>,

    /// Default toolchain file passed to cmake
    pub toolchain_file: Option<PathBuf>,

    /// Explicit cmake generator, replacing the platform-derived one
    pub generator: Option<String>,
}

/// Settings for the external design-transform utility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransformConfig {
    /// Program name or path of the transform utility
    pub command: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.configure.build_type.is_some() {
            self.configure.build_type = other.configure.build_type;
        }
        if other.configure.toolchain_file.is_some() {
            self.configure.toolchain_file = other.configure.toolchain_file;
        }
        if other.configure.generator.is_some() {
            self.configure.generator = other.configure.generator;
        }
        if other.transform.command.is_some() {
            self.transform.command = other.transform.command;
        }
    }
}

/// Load configuration from global and project files.
///
/// Either file may be missing; project settings win.
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::load_or_default(global_path);
    config.merge(Config::load_or_default(project_path));
    config
}
