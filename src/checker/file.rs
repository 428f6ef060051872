use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LayoutGuardError, Result};

use super::classify::{LineKind, classify_line};
use super::scan::scan_content_line;
use super::{CheckConfig, Diagnostic, ScanState};

/// Drives the line classifier and scanner over the lines of one file.
pub struct FileChecker<'a> {
    config: &'a CheckConfig,
}

impl<'a> FileChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    /// Check in-memory source text.
    #[must_use]
    pub fn check_source(&self, source: &str) -> Option<Diagnostic> {
        let mut session = Session::new(self.config);
        source
            .lines()
            .find_map(|line| session.feed(line, line.len()).err())
    }

    /// Check lines from a buffered reader, stopping at the first diagnostic.
    ///
    /// Lines need not be valid UTF-8: invalid sequences are decoded lossily,
    /// and line length is still measured on the raw bytes.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn check_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<Option<Diagnostic>> {
        let mut session = Session::new(self.config);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let raw = strip_line_ending(&buf);
            let line = String::from_utf8_lossy(raw);
            if let Err(diagnostic) = session.feed(&line, raw.len()) {
                return Ok(Some(diagnostic));
            }
        }

        Ok(None)
    }

    /// Check the file at `path`.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be opened or read.
    pub fn check_path(&self, path: &Path) -> Result<Option<Diagnostic>> {
        let to_error = |source| LayoutGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        self.check_reader(BufReader::new(file)).map_err(to_error)
    }
}

/// One file's scan in progress.
struct Session<'a> {
    config: &'a CheckConfig,
    state: ScanState,
    line_number: usize,
}

impl<'a> Session<'a> {
    fn new(config: &'a CheckConfig) -> Self {
        Self {
            config,
            state: ScanState::new(),
            line_number: 0,
        }
    }

    /// `length` is the byte length of the line as read, before any decoding.
    fn feed(&mut self, line: &str, length: usize) -> std::result::Result<(), Diagnostic> {
        self.line_number += 1;
        let number = self.line_number;

        if length > self.config.line_max_length() {
            return Err(Diagnostic::line_too_long(
                number,
                length,
                self.config.line_max_length(),
            ));
        }

        match classify_line(line, self.config.indent_unit()) {
            LineKind::Blank => self.state.blank_line(number),
            LineKind::StrayWhitespace => Err(Diagnostic::whitespace_on_blank_line(number)),
            LineKind::Comment => {
                self.state.comment_line();
                Ok(())
            }
            LineKind::Content { indent_width, body } => {
                self.state.begin_content(number, body)?;
                scan_content_line(
                    &mut self.state,
                    number,
                    indent_width,
                    self.config.indent_unit().len(),
                    body,
                )
            }
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
