//! Uniform rendering of fatal errors on stderr.
//!
//! Format: `✖ {type}: {message}` followed by an optional `  × {detail}` and
//! `  help: {suggestion}`.

use std::io::{IsTerminal, Write};

use crate::error::LayoutGuardError;

use super::{ColorMode, ansi, is_no_color_set};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        !is_no_color_set() && std::io::stderr().is_terminal()
    }

    /// Prints `error` with its category and underlying cause.
    pub fn print(&self, error: &LayoutGuardError, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.message(),
            error.detail().as_deref(),
            suggestion,
        );
    }

    /// Writes an error to `w`; write failures are ignored since there is
    /// nowhere left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            let _ = writeln!(w, "  help: {s}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
