//! Spans resolved to line/column coordinates for display.

use std::fmt;
use std::path::PathBuf;

/// A span resolved to human-readable line/column coordinates.
///
/// All line and column values are 1-indexed. Columns count bytes, matching
/// the offsets stored in [`Span`](crate::Span). Produced by
/// [`SourceFile::resolve`](crate::SourceFile::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The path of the analyzed file (or a synthetic name for editor buffers).
    pub path: PathBuf,
    /// The starting line number (1-indexed).
    pub start_line: u32,
    /// The starting column number (1-indexed).
    pub start_col: u32,
    /// The ending line number (1-indexed).
    pub end_line: u32,
    /// The ending column number (1-indexed).
    pub end_col: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path.display(),
            self.start_line,
            self.start_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let loc = Location {
            path: PathBuf::from("src/app.js"),
            start_line: 10,
            start_col: 5,
            end_line: 10,
            end_col: 15,
        };
        assert_eq!(format!("{loc}"), "src/app.js:10:5");
    }

    #[test]
    fn display_multiline_span() {
        let loc = Location {
            path: PathBuf::from("index.mjs"),
            start_line: 5,
            start_col: 3,
            end_line: 12,
            end_col: 20,
        };
        // Only the start position is shown.
        assert_eq!(format!("{loc}"), "index.mjs:5:3");
    }
}
