use std::path::Path;

use regex::Regex;

use crate::error::{LayoutGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Includes files by extension, then drops any whose path matches an exclude pattern.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffix: String,
    exclude_patterns: Vec<Regex>,
}

impl ExtensionFilter {
    /// Create a filter for `extension` (without the leading dot).
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid regex.
    pub fn new(extension: &str, exclude_patterns: &[String]) -> Result<Self> {
        let exclude_patterns = exclude_patterns
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| LayoutGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            suffix: format!(".{extension}"),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(&path_str))
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
