use std::fmt::Write;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, is_no_color_set};

/// One line per file in discovery order, followed by a summary.
pub struct TextFormatter {
    use_colors: bool,
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            quiet: false,
        }
    }

    /// In quiet mode passed files and the summary are omitted.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        let path = result.path().display();
        match result {
            CheckResult::Passed { .. } => {
                let status = self.colorize("PASSED", ansi::GREEN);
                let _ = writeln!(output, "✓ {status}: {path}");
            }
            CheckResult::Failed { diagnostic, .. } => {
                let status = self.colorize("FAILED", ansi::RED);
                let _ = writeln!(output, "✗ {status}: {path}: {diagnostic}");
            }
            CheckResult::Unreadable { error, .. } => {
                let status = self.colorize("ERROR", ansi::RED);
                let _ = writeln!(output, "✗ {status}: {path}: {error}");
            }
        }
    }

    fn format_summary(&self, total: usize, passed: usize, failed: usize) -> String {
        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);

        format!("Summary: {total} files checked, {passed_str} passed, {failed_str} failed")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            if self.quiet && result.is_passed() {
                continue;
            }
            self.format_result(result, &mut output);
        }

        if !self.quiet {
            let passed = results.iter().filter(|r| r.is_passed()).count();
            let summary = self.format_summary(results.len(), passed, results.len() - passed);
            let _ = writeln!(output, "{summary}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
