//! Source spans implicated by a diagnostic, tagged by role.

use quill_source::Span;
use serde::{Deserialize, Serialize};

/// The role a span plays within a diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LabelStyle {
    /// The error site (e.g. rendered `^^^^`).
    Primary,
    /// Supporting context such as "variable declared here" (e.g. rendered `----`).
    Secondary,
}

/// A span implicated by a diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Label {
    /// The source span this label annotates.
    pub span: Span,
    /// Whether this is the error site or supporting context.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label (the error site).
    pub fn primary(span: Span) -> Self {
        Self {
            span,
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label (supporting context).
    pub fn secondary(span: Span) -> Self {
        Self {
            span,
            style: LabelStyle::Secondary,
        }
    }

    /// Returns `true` if this label marks the error site.
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}
