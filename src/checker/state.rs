use super::Diagnostic;

/// What the previous line was, as far as blank-line rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineContext {
    /// No line has been read yet.
    #[default]
    Start,
    Blank,
    Comment,
    Content,
    /// A content line whose net nesting change was positive.
    SectionOpener,
}

impl LineContext {
    /// Whether a section may be declared directly after this line.
    #[must_use]
    pub const fn separates_section(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// Cross-line state of one file's scan.
///
/// Created fresh for every file and threaded through its lines in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub indent_level: usize,
    pub open_curly: usize,
    pub open_bracket: usize,
    pub dangling_assignment: bool,
    pub previous: LineContext,
    /// Set by a line that closes a nested section; survives comment lines.
    pub blank_required: bool,
    /// Set by a line ending with a section opener; cleared by any non-blank line.
    pub blank_forbidden: bool,
}

impl ScanState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a blank line.
    ///
    /// # Errors
    /// `E001` after another blank line, `E002` right after a section opener.
    pub fn blank_line(&mut self, line: usize) -> Result<(), Diagnostic> {
        if self.previous == LineContext::Blank {
            return Err(Diagnostic::consecutive_blank_lines(line));
        }
        if self.blank_forbidden {
            return Err(Diagnostic::blank_line_not_allowed(line));
        }

        self.previous = LineContext::Blank;
        self.blank_required = false;
        Ok(())
    }

    pub const fn comment_line(&mut self) {
        self.blank_forbidden = false;
        self.previous = LineContext::Comment;
    }

    /// Prepare for scanning a content line whose text after indentation is `body`.
    ///
    /// # Errors
    /// `E003` when a blank line is owed and the line does not close a section.
    pub fn begin_content(&mut self, line: usize, body: &str) -> Result<(), Diagnostic> {
        self.blank_forbidden = false;

        if self.blank_required && !body.starts_with(['}', ']']) {
            return Err(Diagnostic::missing_blank_after_section(line));
        }
        Ok(())
    }

    /// Commit a content line's net nesting change.
    pub const fn finish_content(&mut self, depth_delta: isize) {
        self.previous = if depth_delta > 0 {
            LineContext::SectionOpener
        } else {
            LineContext::Content
        };
        self.indent_level = self.indent_level.saturating_add_signed(depth_delta);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
