//! Streams diagnostics as one line per message.

use crate::kinds::Diagnostic;
use crate::policy::LintPolicy;
use crate::reporter::Reporter;
use crate::severity::Severity;
use quill_source::SourceFile;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// A reporter that writes each diagnostic as it arrives.
///
/// Output looks like:
/// ```text
/// app.js:3:1: warning: use of undeclared variable: foo [E057]
/// app.js:1:5: error: redeclaration of variable: x [E034]
/// app.js:1:1: note: variable already declared here [E034]
/// ```
///
/// Write failures are logged and otherwise ignored.
pub struct TextReporter<'a, W: Write> {
    source: &'a SourceFile,
    writer: Mutex<W>,
    policy: LintPolicy,
}

impl<'a, W: Write> TextReporter<'a, W> {
    /// Creates a reporter for diagnostics about `source`, writing to `writer`.
    pub fn new(source: &'a SourceFile, writer: W) -> Self {
        Self::with_policy(source, writer, LintPolicy::new())
    }

    /// Creates a reporter that filters through `policy`.
    pub fn with_policy(source: &'a SourceFile, writer: W, policy: LintPolicy) -> Self {
        Self {
            source,
            writer: Mutex::new(writer),
            policy,
        }
    }

    /// Consumes the reporter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn format(&self, diagnostic: &Diagnostic, severity: Severity) -> String {
        let message = diagnostic.message();
        let code = message.code;
        let mut out = format!(
            "{}: {}: {} [{}]\n",
            self.source.resolve(message.primary.span()),
            severity,
            message.primary.format(self.source),
            code
        );
        for note in &message.notes {
            out.push_str(&format!(
                "{}: {}: {} [{}]\n",
                self.source.resolve(note.span()),
                Severity::Note,
                note.format(self.source),
                code
            ));
        }
        out
    }
}

impl<W: Write> Reporter for TextReporter<'_, W> {
    fn report(&self, diagnostic: Diagnostic) {
        let Some(severity) = self.policy.effective_severity(&diagnostic) else {
            return;
        };
        let text = self.format(&diagnostic, severity);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writer.write_all(text.as_bytes()) {
            tracing::warn!(code = %diagnostic.code(), error = %err, "failed to write diagnostic");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{DiagnosticKind, RedeclarationOfVariable, UseOfUndeclaredVariable};
    use pretty_assertions::assert_eq;
    use quill_source::{Identifier, Span};
    use std::io;

    fn output(reporter: TextReporter<'_, Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn primary_and_notes() {
        let src = SourceFile::new("app.js", "let x;\nlet x;\nfoo;\n".to_string());
        let reporter = TextReporter::new(&src, Vec::new());
        reporter.report(
            UseOfUndeclaredVariable {
                name: Identifier::new(Span::new(14, 17), "foo"),
            }
            .into(),
        );
        reporter.report(
            RedeclarationOfVariable {
                redeclaration: Identifier::new(Span::new(11, 12), "x"),
                original_declaration: Identifier::new(Span::new(4, 5), "x"),
            }
            .into(),
        );
        assert_eq!(
            output(reporter),
            "app.js:3:1: warning: use of undeclared variable: foo [E057]\n\
             app.js:2:5: error: redeclaration of variable: x [E034]\n\
             app.js:1:5: note: variable already declared here [E034]\n"
        );
    }

    #[test]
    fn policy_filters_and_promotes() {
        let src = SourceFile::new("app.js", "foo; bar;".to_string());
        let policy = LintPolicy::new().deny(DiagnosticKind::UseOfUndeclaredVariable);
        let reporter = TextReporter::with_policy(&src, Vec::new(), policy);
        reporter.report(
            UseOfUndeclaredVariable {
                name: Identifier::new(Span::new(5, 8), "bar"),
            }
            .into(),
        );
        assert_eq!(
            output(reporter),
            "app.js:1:6: error: use of undeclared variable: bar [E057]\n"
        );

        let policy = LintPolicy::new().allow(DiagnosticKind::UseOfUndeclaredVariable);
        let reporter = TextReporter::with_policy(&src, Vec::new(), policy);
        reporter.report(
            UseOfUndeclaredVariable {
                name: Identifier::new(Span::new(0, 3), "foo"),
            }
            .into(),
        );
        assert_eq!(output(reporter), "");
    }

    #[test]
    fn every_kind_prints_one_line_per_message() {
        let src = SourceFile::new("big.js", "x".repeat(4096));
        let reporter = TextReporter::new(&src, Vec::new());
        let fixtures = Diagnostic::fixtures();
        let expected: usize = fixtures.iter().map(|d| 1 + d.kind().note_count()).sum();
        for diag in fixtures {
            reporter.report(diag);
        }
        assert_eq!(output(reporter).lines().count(), expected);
    }

    #[test]
    fn write_failure_does_not_panic() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let src = SourceFile::new("app.js", "foo".to_string());
        let reporter = TextReporter::new(&src, Broken);
        reporter.report(
            UseOfUndeclaredVariable {
                name: Identifier::new(Span::new(0, 3), "foo"),
            }
            .into(),
        );
    }
}
