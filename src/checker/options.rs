use crate::error::{LayoutGuardError, Result};

pub const DEFAULT_INDENT: &str = "  ";
pub const DEFAULT_LINE_MAX_LENGTH: usize = 100;

/// Settings for checking a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    indent_unit: String,
    line_max_length: usize,
}

impl CheckConfig {
    /// # Errors
    /// Returns a configuration error if `indent_unit` is empty.
    pub fn new(indent_unit: impl Into<String>, line_max_length: usize) -> Result<Self> {
        let indent_unit = indent_unit.into();
        if indent_unit.is_empty() {
            return Err(LayoutGuardError::Config(
                "indent must not be empty".to_string(),
            ));
        }
        Ok(Self {
            indent_unit,
            line_max_length,
        })
    }

    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    #[must_use]
    pub const fn line_max_length(&self) -> usize {
        self.line_max_length
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT.to_string(),
            line_max_length: DEFAULT_LINE_MAX_LENGTH,
        }
    }
}
