//! Source text primitives shared by the diagnostic core.
//!
//! This crate provides byte-offset [`Span`]s into analyzed text, named
//! [`Identifier`]s, and the [`SourceFile`] that resolves offsets to
//! human-readable [`Location`]s when diagnostics are rendered.

#![warn(missing_docs)]

pub mod identifier;
pub mod location;
pub mod source_file;
pub mod span;

pub use identifier::Identifier;
pub use location::Location;
pub use source_file::SourceFile;
pub use span::Span;
