use std::iter::Peekable;
use std::str::Chars;

use super::{Diagnostic, ScanState};

/// Character cursor over a line with single-character lookahead.
struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    consumed: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            consumed: 0,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.consumed += 1;
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }
}

/// Per-line scanner for brackets, quotes, interpolation and assignment operators.
///
/// Quote balance is not validated: an unclosed `"` hides the rest of the line.
struct LineScanner<'s> {
    state: &'s mut ScanState,
    line: usize,
    pending_operator: bool,
    depth_delta: isize,
    in_interpolation: bool,
    in_quotes: bool,
}

impl<'s> LineScanner<'s> {
    const fn new(state: &'s mut ScanState, line: usize) -> Self {
        Self {
            state,
            line,
            pending_operator: false,
            depth_delta: 0,
            in_interpolation: false,
            in_quotes: false,
        }
    }

    fn run(mut self, body: &str) -> Result<isize, Diagnostic> {
        let mut cursor = Cursor::new(body);

        while let Some(ch) = cursor.bump() {
            let at_line_start = cursor.consumed == 1;
            self.step(ch, at_line_start, &mut cursor)?;
        }

        self.finish_line();
        Ok(self.depth_delta)
    }

    fn step(
        &mut self,
        ch: char,
        at_line_start: bool,
        cursor: &mut Cursor<'_>,
    ) -> Result<(), Diagnostic> {
        if self.in_quotes {
            self.in_quotes = ch != '"';
            return Ok(());
        }

        match ch {
            '"' => self.in_quotes = true,
            '$' if cursor.eat('{') => self.in_interpolation = true,
            '=' | ':' => self.assignment_operator(ch)?,
            '}' if self.in_interpolation => self.in_interpolation = false,
            '{' | '[' => self.open(ch, cursor.at_end())?,
            '}' | ']' => self.close(ch, at_line_start, cursor.peek())?,
            _ => self.pending_operator = false,
        }
        Ok(())
    }

    fn assignment_operator(&mut self, operator: char) -> Result<(), Diagnostic> {
        if self.pending_operator {
            return Err(Diagnostic::invalid_assignation(self.line, operator));
        }
        self.pending_operator = true;
        Ok(())
    }

    fn open(&mut self, bracket: char, at_line_end: bool) -> Result<(), Diagnostic> {
        self.depth_delta += 1;
        if bracket == '{' {
            self.state.open_curly += 1;
        } else {
            self.state.open_bracket += 1;
        }

        if at_line_end {
            if self.state.open_bracket == 0 && !self.state.previous.separates_section() {
                return Err(Diagnostic::missing_blank_before_section(self.line));
            }
            self.state.blank_forbidden = true;
        }
        Ok(())
    }

    fn close(
        &mut self,
        bracket: char,
        at_line_start: bool,
        next: Option<char>,
    ) -> Result<(), Diagnostic> {
        let open = if bracket == '}' {
            &mut self.state.open_curly
        } else {
            &mut self.state.open_bracket
        };
        if *open == 0 {
            return Err(Diagnostic::unbalanced_bracket(self.line, bracket));
        }
        *open -= 1;

        self.state.blank_required = at_line_start && next != Some(',');

        if self.depth_delta > 0 {
            self.depth_delta -= 1;
        } else if self.state.indent_level > 0 {
            self.state.indent_level -= 1;
        } else {
            return Err(Diagnostic::unbalanced_bracket(self.line, bracket));
        }
        Ok(())
    }

    const fn finish_line(&mut self) {
        if self.pending_operator {
            self.depth_delta += 1;
            self.state.dangling_assignment = true;
        } else if self.state.dangling_assignment {
            self.depth_delta -= 1;
            self.state.dangling_assignment = false;
        }
    }
}

/// Scan a content line and commit its effect on `state`.
///
/// `indent_width` is the byte length of the stripped indentation and `body`
/// the rest of the line. `indent_unit_len` must be non-zero.
///
/// # Errors
/// Returns the first diagnostic raised by the line: `E004`, `F001` or `F002`
/// from the character scan, then `E005` if the indentation disagrees with the
/// nesting level.
pub fn scan_content_line(
    state: &mut ScanState,
    line: usize,
    indent_width: usize,
    indent_unit_len: usize,
    body: &str,
) -> Result<(), Diagnostic> {
    let depth_delta = LineScanner::new(state, line).run(body)?;

    let current = indent_width / indent_unit_len;
    if current != state.indent_level {
        return Err(Diagnostic::indentation_mismatch(
            line,
            current,
            state.indent_level,
        ));
    }

    state.finish_content(depth_delta);
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
