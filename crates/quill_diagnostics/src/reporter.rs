//! The reporting contract between the analyzer and diagnostic sinks.

use crate::kinds::Diagnostic;

/// Receives diagnostics as the analyzer produces them.
///
/// There is one reporter per analysis. The analyzer constructs each
/// diagnostic and hands it over by value; the reporter may keep it, print it,
/// or drop it. A sink that treats kinds differently `match`es on
/// [`Diagnostic`] and ignores the rest with an explicit `_ => {}` arm.
pub trait Reporter {
    /// Accepts one diagnostic. Reporting never fails.
    fn report(&self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// A reporter that discards every diagnostic.
///
/// Used when the analyzer runs for its side effects only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

static NULL_REPORTER: NullReporter = NullReporter;

impl NullReporter {
    /// Returns the shared instance.
    pub fn instance() -> &'static NullReporter {
        &NULL_REPORTER
    }
}

impl Reporter for NullReporter {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards each diagnostic to two reporters, first then second.
///
/// Nest `Fanout`s to reach more sinks.
#[derive(Debug, Default)]
pub struct Fanout<A, B> {
    /// Receives each diagnostic first.
    pub first: A,
    /// Receives a copy of each diagnostic second.
    pub second: B,
}

impl<A: Reporter, B: Reporter> Fanout<A, B> {
    /// Creates a reporter forwarding to both `first` and `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Reporter, B: Reporter> Reporter for Fanout<A, B> {
    fn report(&self, diagnostic: Diagnostic) {
        self.first.report(diagnostic.clone());
        self.second.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{DiagnosticKind, UnexpectedToken};
    use crate::sink::DiagnosticSink;
    use quill_source::Span;

    #[test]
    fn null_reporter_accepts_every_kind() {
        let fixtures = Diagnostic::fixtures();
        for diag in &fixtures {
            let copy = diag.clone();
            NullReporter::instance().report(copy.clone());
            NullReporter::instance().report(copy);
        }
        // The originals were never handed over, so nothing observable changed.
        assert_eq!(fixtures, Diagnostic::fixtures());
    }

    #[test]
    fn null_reporter_is_shared() {
        assert!(std::ptr::eq(NullReporter::instance(), NullReporter::instance()));
    }

    #[test]
    fn forwarding_through_references_and_boxes() {
        let sink = DiagnosticSink::new();
        let by_ref: &DiagnosticSink = &sink;
        by_ref.report(UnexpectedToken { token: Span::new(0, 1) }.into());

        let boxed: Box<dyn Reporter + '_> = Box::new(&sink);
        boxed.report(UnexpectedToken { token: Span::new(2, 3) }.into());

        assert_eq!(sink.diagnostics().len(), 2);
    }

    #[test]
    fn fanout_reaches_both_sinks() {
        let left = DiagnosticSink::new();
        let right = DiagnosticSink::new();
        let fanout = Fanout::new(&left, Fanout::new(&right, NullReporter));
        fanout.report(UnexpectedToken { token: Span::new(5, 6) }.into());

        assert_eq!(left.diagnostics(), right.diagnostics());
        assert_eq!(left.diagnostics()[0].kind(), DiagnosticKind::UnexpectedToken);
    }

    #[test]
    fn sinks_can_ignore_kinds_explicitly() {
        use std::cell::Cell;

        struct UndeclaredCounter(Cell<usize>);

        impl Reporter for UndeclaredCounter {
            fn report(&self, diagnostic: Diagnostic) {
                match diagnostic {
                    Diagnostic::UseOfUndeclaredVariable(_)
                    | Diagnostic::AssignmentToUndeclaredVariable(_) => {
                        self.0.set(self.0.get() + 1)
                    }
                    _ => {}
                }
            }
        }

        let counter = UndeclaredCounter(Cell::new(0));
        for diag in Diagnostic::fixtures() {
            counter.report(diag);
        }
        assert_eq!(counter.0.get(), 2);
    }
}
