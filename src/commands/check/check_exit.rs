use crate::checker::CheckResult;
use crate::error::LayoutGuardError;
use crate::{EXIT_CHECK_FAILED, EXIT_IO_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};

/// Exit code for a completed run: any failed or unreadable file fails it.
#[must_use]
pub fn determine_exit_code(results: &[CheckResult]) -> i32 {
    if results.iter().any(CheckResult::is_failed) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

/// Exit code for a run aborted by `error`.
///
/// Only directory traversal maps to `EXIT_IO_ERROR`; every other fatal
/// error, a failed write of the report included, maps to `EXIT_USAGE_ERROR`.
#[must_use]
pub const fn exit_code_for_error(error: &LayoutGuardError) -> i32 {
    if error.is_traversal() {
        EXIT_IO_ERROR
    } else {
        EXIT_USAGE_ERROR
    }
}
