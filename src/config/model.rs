use serde::{Deserialize, Serialize};

use crate::checker::{CheckConfig, DEFAULT_INDENT, DEFAULT_LINE_MAX_LENGTH};
use crate::error::Result;

pub const DEFAULT_EXTENSION: &str = "conf";

/// Root of `.layout-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Layout rules and file selection [check].
    #[serde(default)]
    pub check: CheckSection,
}

/// The `[check]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckSection {
    /// Indentation string; every character in it counts as indentation.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Maximum line length in bytes.
    #[serde(default = "default_line_max_length")]
    pub line_max_length: usize,

    /// Extension of the files to check, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Regexes matched against file paths; matching files are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            line_max_length: default_line_max_length(),
            extension: default_extension(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Build the per-file check settings.
    ///
    /// # Errors
    /// Returns a configuration error if the indent is empty.
    pub fn check_config(&self) -> Result<CheckConfig> {
        CheckConfig::new(self.check.indent.clone(), self.check.line_max_length)
    }
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

const fn default_line_max_length() -> usize {
    DEFAULT_LINE_MAX_LENGTH
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}
