use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude file pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LayoutGuardError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Walk { .. } => "Walk",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary message, without the category prefix of `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::Walk { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Walk { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Whether the error stems from walking the filesystem. Other failures,
    /// including writing the report to stdout, are not traversal errors.
    #[must_use]
    pub const fn is_traversal(&self) -> bool {
        matches!(self, Self::Walk { .. })
    }
}

pub type Result<T> = std::result::Result<T, LayoutGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
