//! Analyzed source text with line-start indexing for fast line/column lookup.

use crate::location::Location;
use crate::span::Span;
use std::path::PathBuf;

/// A piece of source text that diagnostics point into.
///
/// Stores the text along with precomputed line-start offsets for efficient
/// line/column resolution during diagnostic rendering.
pub struct SourceFile {
    /// The file path (or a synthetic name such as `<stdin>`).
    pub path: PathBuf,
    /// The full text content.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    ///
    /// Offsets past the end of the text resolve onto the last line.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let offset = byte_offset.min(self.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text covered by `span`.
    ///
    /// Spans reaching past the end of the text (e.g. "expected '}' by end of
    /// file") are cut off at the end, and offsets that split a UTF-8 sequence
    /// yield an empty string, so rendering never panics.
    pub fn snippet(&self, span: Span) -> &str {
        let end = (span.end as usize).min(self.content.len());
        let start = (span.start as usize).min(end);
        self.content.get(start..end).unwrap_or("")
    }

    /// Returns the full line of text containing the given byte offset,
    /// without its line terminator.
    pub fn line_text(&self, byte_offset: u32) -> &str {
        let (line, _) = self.line_col(byte_offset);
        let start = self.line_starts[(line - 1) as usize] as usize;
        let end = self
            .line_starts
            .get(line as usize)
            .map_or(self.content.len(), |&next| next as usize);
        self.content
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r'])
    }

    /// Resolves a [`Span`] to human-readable line/column coordinates.
    pub fn resolve(&self, span: Span) -> Location {
        let (start_line, start_col) = self.line_col(span.start);
        let (end_line, end_col) = self.line_col(span.end.saturating_sub(1).max(span.start));
        Location {
            path: self.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    fn len(&self) -> u32 {
        u32::try_from(self.content.len()).unwrap_or(u32::MAX)
    }
}

/// Computes the byte offsets of each line start in the given content.
///
/// `\n`, `\r\n`, and a lone `\r` each terminate a line.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    let bytes = content.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        let ends_line = match byte {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
