//! The diagnostic taxonomy and the reporting surface of the linter.
//!
//! Every problem the analyzer can find is a distinct kind with its own
//! struct, stable code, severity, and message templates, all generated from
//! one table in [`kinds`]. The analyzer hands each [`Diagnostic`] to a
//! [`Reporter`]: [`NullReporter`] discards it, [`DiagnosticSink`] collects it,
//! and [`TextReporter`] prints it. [`DiagnosticRenderer`] implementations
//! format collected diagnostics for a terminal or as JSON.

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod code;
pub mod kinds;
pub mod label;
pub mod language;
pub mod message;
pub mod policy;
pub mod renderer;
pub mod reporter;
pub mod severity;
pub mod sink;
pub mod text_reporter;

#[cfg(test)]
mod fixture;

pub use code::{DiagnosticCode, UnknownCodeError};
pub use kinds::*;
pub use label::{Label, LabelStyle};
pub use language::{StatementKind, VariableKind};
pub use message::{format_message, DiagnosticMessage, MessageArg, MessageSlot};
pub use policy::LintPolicy;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use reporter::{Fanout, NullReporter, Reporter};
pub use severity::Severity;
pub use sink::DiagnosticSink;
pub use text_reporter::TextReporter;
