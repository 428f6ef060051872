/// Classification of a single raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty once the indent alphabet is stripped.
    Blank,
    /// Only whitespace, but some of it lies outside the indent alphabet.
    StrayWhitespace,
    /// Starts with `#` or `//` after the indentation.
    Comment,
    /// Anything else. `indent_width` is the byte length of the stripped
    /// leading run and `body` is the remainder of the line.
    Content { indent_width: usize, body: &'a str },
}

/// Classify `line` (without its terminator) against the indent alphabet.
///
/// The leading run is stripped character by character: every character that
/// occurs anywhere in `indent_unit` is removed, regardless of order or count.
/// With an indent unit of `"  "` a line indented with three spaces is stripped
/// entirely, and with `"\t"` leading spaces are kept as content.
#[must_use]
pub fn classify_line<'a>(line: &'a str, indent_unit: &str) -> LineKind<'a> {
    let body = line.trim_start_matches(|c: char| indent_unit.contains(c));

    if body.is_empty() {
        return LineKind::Blank;
    }

    if line.trim().is_empty() {
        return LineKind::StrayWhitespace;
    }

    if body.starts_with('#') || body.starts_with("//") {
        return LineKind::Comment;
    }

    LineKind::Content {
        indent_width: line.len() - body.len(),
        body,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
