use std::path::{Path, PathBuf};

use super::Diagnostic;

/// Outcome of checking one file.
///
/// `Unreadable` is kept apart from `Failed`: the file could not be checked at
/// all, as opposed to being checked and found malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed {
        path: PathBuf,
    },
    Failed {
        path: PathBuf,
        diagnostic: Diagnostic,
    },
    Unreadable {
        path: PathBuf,
        error: String,
    },
}

impl CheckResult {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path } | Self::Failed { path, .. } | Self::Unreadable { path, .. } => {
                path
            }
        }
    }

    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Failed { diagnostic, .. } => Some(diagnostic),
            Self::Passed { .. } | Self::Unreadable { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// True for malformed and unreadable files alike.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.is_passed()
    }

    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }
}
