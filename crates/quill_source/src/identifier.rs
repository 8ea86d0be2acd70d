//! Names as they occur in source text.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name occurring in the analyzed text, together with where it occurs.
///
/// The `normalized_name` is the name after escape sequences are decoded, so
/// `\u{61}bc` and `abc` carry the same normalized name while their spans cover
/// different source text. Diagnostics own their identifiers so they remain
/// renderable after the lexer's buffers are gone.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Identifier {
    /// The source bytes spelling this name.
    pub span: Span,
    /// The decoded name.
    pub normalized_name: Box<str>,
}

impl Identifier {
    /// Creates an identifier spelled at `span` with the given decoded name.
    pub fn new(span: Span, normalized_name: impl Into<Box<str>>) -> Self {
        Self {
            span,
            normalized_name: normalized_name.into(),
        }
    }

    /// Returns the source span spelling this name.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the decoded name.
    pub fn name(&self) -> &str {
        &self.normalized_name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_name_may_differ_from_source() {
        let src = r"\u{61}bc = 1";
        let ident = Identifier::new(Span::new(0, 8), "abc");
        assert_eq!(ident.name(), "abc");
        assert_eq!(ident.span(), Span::new(0, 8));
        assert_eq!(&src[ident.span.start as usize..ident.span.end as usize], r"\u{61}bc");
    }

    #[test]
    fn display_uses_normalized_name() {
        let ident = Identifier::new(Span::new(0, 3), "foo");
        assert_eq!(format!("{ident}"), "foo");
    }

    #[test]
    fn serde_roundtrip() {
        let ident = Identifier::new(Span::new(1, 4), "bar");
        let json = serde_json::to_string(&ident).unwrap();
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(ident, back);
    }
}
