use std::fmt;

use serde::Serialize;

/// Stable identifiers for layout violations.
///
/// `E` codes are layout (whitespace and blank-line) violations, `F` codes are
/// structural ones (brackets and assignment operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    E001,
    E002,
    E003,
    E004,
    E005,
    E006,
    E007,
    F001,
    F002,
}

impl DiagnosticCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E002 => "E002",
            Self::E003 => "E003",
            Self::E004 => "E004",
            Self::E005 => "E005",
            Self::E006 => "E006",
            Self::E007 => "E007",
            Self::F001 => "F001",
            Self::F002 => "F002",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first layout violation found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    fn new(code: DiagnosticCode, line: usize, message: String) -> Self {
        Self {
            code,
            line,
            message,
        }
    }

    #[must_use]
    pub fn consecutive_blank_lines(line: usize) -> Self {
        Self::new(
            DiagnosticCode::E001,
            line,
            format!("More than one blank line successively at line {line}"),
        )
    }

    #[must_use]
    pub fn blank_line_not_allowed(line: usize) -> Self {
        Self::new(
            DiagnosticCode::E002,
            line,
            format!("Blank line is not allowed at line {line}"),
        )
    }

    #[must_use]
    pub fn missing_blank_after_section(line: usize) -> Self {
        Self::new(
            DiagnosticCode::E003,
            line,
            format!("Expecting a blank line after nested section at line {line}"),
        )
    }

    #[must_use]
    pub fn missing_blank_before_section(line: usize) -> Self {
        Self::new(
            DiagnosticCode::E004,
            line,
            format!("Missing blank line before section declaration at line {line}"),
        )
    }

    #[must_use]
    pub fn indentation_mismatch(line: usize, actual: usize, expected: usize) -> Self {
        Self::new(
            DiagnosticCode::E005,
            line,
            format!("Indentation mismatch at line {line} ({actual} != {expected})"),
        )
    }

    #[must_use]
    pub fn whitespace_on_blank_line(line: usize) -> Self {
        Self::new(
            DiagnosticCode::E006,
            line,
            format!("Whitespace characters must be trimmed on blank line {line}"),
        )
    }

    #[must_use]
    pub fn line_too_long(line: usize, actual: usize, max: usize) -> Self {
        Self::new(
            DiagnosticCode::E007,
            line,
            format!("Line {line} is too long: {actual} > {max}"),
        )
    }

    #[must_use]
    pub fn unbalanced_bracket(line: usize, bracket: char) -> Self {
        Self::new(
            DiagnosticCode::F001,
            line,
            format!("Unbalanced '{bracket}' at line {line}"),
        )
    }

    #[must_use]
    pub fn invalid_assignation(line: usize, operator: char) -> Self {
        Self::new(
            DiagnosticCode::F002,
            line,
            format!("Invalid assignation '{operator}' at line {line}"),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
