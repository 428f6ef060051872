use serde::Serialize;

use crate::checker::{CheckResult, Diagnostic};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    errors: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<&'a Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let (passed, failed, errors) =
            results
                .iter()
                .fold((0, 0, 0), |(p, f, e), r| match r {
                    CheckResult::Passed { .. } => (p + 1, f, e),
                    CheckResult::Failed { .. } => (p, f + 1, e),
                    CheckResult::Unreadable { .. } => (p, f, e + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total_files: results.len(),
                passed,
                failed,
                errors,
            },
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FileResult<'_> {
    let (status, error) = match result {
        CheckResult::Passed { .. } => ("passed", None),
        CheckResult::Failed { .. } => ("failed", None),
        CheckResult::Unreadable { error, .. } => ("error", Some(error.as_str())),
    };

    FileResult {
        path: result.path().display().to_string(),
        status,
        diagnostic: result.diagnostic(),
        error,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
