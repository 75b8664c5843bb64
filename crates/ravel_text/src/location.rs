//! Mapping byte positions to line/column for error reporting.

use std::fmt;

/// A 1-based line and column.
///
/// Columns count bytes, not characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Locate `position` within `input`.
///
/// A position past the end is clamped to the end of input, so the position
/// carried by an end-of-input error still maps to something printable.
pub fn location(input: &[u8], position: usize) -> Location {
    let prefix = &input[..position.min(input.len())];
    let line_start = prefix.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    Location {
        line: prefix.iter().filter(|&&b| b == b'\n').count() + 1,
        column: prefix.len() - line_start + 1,
    }
}
