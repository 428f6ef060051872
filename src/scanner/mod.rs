mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::error::{LayoutGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory (or a single file) and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root or any directory below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| LayoutGuardError::Walk {
                path: source
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            } else {
                trace!(path = %entry.path().display(), "skipped");
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
