mod classify;
mod diagnostic;
mod file;
mod options;
mod result;
mod scan;
mod state;

pub use classify::{LineKind, classify_line};
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use file::FileChecker;
pub use options::{CheckConfig, DEFAULT_INDENT, DEFAULT_LINE_MAX_LENGTH};
pub use result::CheckResult;
pub use scan::scan_content_line;
pub use state::{LineContext, ScanState};

use std::path::Path;

pub trait Checker {
    /// Check the file at `path` and report its outcome.
    fn check(&self, path: &Path) -> CheckResult;
}

impl Checker for FileChecker<'_> {
    fn check(&self, path: &Path) -> CheckResult {
        let path_buf = path.to_path_buf();
        match self.check_path(path) {
            Ok(None) => CheckResult::Passed { path: path_buf },
            Ok(Some(diagnostic)) => CheckResult::Failed {
                path: path_buf,
                diagnostic,
            },
            Err(e) => CheckResult::Unreadable {
                path: path_buf,
                error: e
                    .detail()
                    .map_or_else(|| e.to_string(), |detail| format!("{e}: {detail}")),
            },
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
