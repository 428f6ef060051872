use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LayoutGuardError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".layout-guard.toml";

/// Loads configuration from the filesystem.
///
/// Looks for `.layout-guard.toml` in the current directory and falls back to
/// `Config::default()` when it is absent.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        if config.check.indent.is_empty() {
            return Err(LayoutGuardError::Config(
                "[check] indent must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => {
                debug!("no {LOCAL_CONFIG_NAME} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading configuration");
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| LayoutGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
