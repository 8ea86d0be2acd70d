//! Byte-offset ranges into analyzed source text.

use serde::{Deserialize, Serialize};

/// A byte offset range within the text being analyzed.
///
/// Spans anchor every diagnostic to the exact source it talks about. The
/// `start` is inclusive and `end` is exclusive. Offsets are stored exactly as
/// given; a span is never clamped or normalized after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the start of the span (inclusive).
    pub start: u32,
    /// Byte offset of the end of the span (exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span covering `start..end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a span from the start of `first` to the end of `last`.
    ///
    /// Used by messages that underline a whole construct built from two
    /// tokens, e.g. `* foo` in `import * foo from "mod"`.
    pub const fn between(first: Span, last: Span) -> Self {
        Self {
            start: first.start,
            end: last.end,
        }
    }

    /// Returns the byte offset where this span begins.
    pub const fn begin(self) -> u32 {
        self.start
    }

    /// Returns the byte offset one past the end of this span.
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Merges two spans, producing a span that covers both.
    ///
    /// Takes the minimum start and maximum end of the two spans.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        let s = Span::new(10, 20);
        assert_eq!(s.start, 10);
        assert_eq!(s.end, 20);
        assert_eq!(s.begin(), 10);
        assert_eq!(s.end(), 20);
    }

    #[test]
    fn offsets_are_not_clamped() {
        let s = Span::new(u32::MAX - 1, u32::MAX);
        assert_eq!(s.begin(), u32::MAX - 1);
        assert_eq!(s.end(), u32::MAX);

        // An inverted span is stored as given.
        let inverted = Span::new(9, 3);
        assert_eq!((inverted.start, inverted.end), (9, 3));
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
    }

    #[test]
    fn merge_spans() {
        let a = Span::new(5, 15);
        let b = Span::new(10, 25);
        assert_eq!(a.merge(b), Span::new(5, 25));
        assert_eq!(a.merge(b), b.merge(a));
    }

    #[test]
    fn between_tokens() {
        let star = Span::new(7, 8);
        let alias = Span::new(9, 12);
        assert_eq!(Span::between(star, alias), Span::new(7, 12));
    }

    #[test]
    fn len_and_empty() {
        let s = Span::new(10, 20);
        assert_eq!(s.len(), 10);
        assert!(!s.is_empty());

        let empty = Span::new(5, 5);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let s = Span::new(10, 20);
        let json = serde_json::to_string(&s).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
