use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;

use crate::checker::{CheckResult, Checker};
use crate::scanner::FileScanner;

/// Discover files under every path, in argument order.
///
/// # Errors
/// Stops at the first traversal error.
pub fn scan_paths<S: FileScanner>(scanner: &S, paths: &[PathBuf]) -> crate::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let found = scanner.scan(path)?;
        debug!(path = %path.display(), count = found.len(), "scanned");
        files.extend(found);
    }
    Ok(files)
}

/// Check files in parallel. Results keep the order of `files`.
pub fn check_files<C: Checker + Sync>(checker: &C, files: &[PathBuf]) -> Vec<CheckResult> {
    files
        .par_iter()
        .map(|path| {
            let result = checker.check(path);
            debug!(
                path = %path.display(),
                passed = result.is_passed(),
                "checked"
            );
            result
        })
        .collect()
}
