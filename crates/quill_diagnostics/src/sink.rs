//! Thread-safe diagnostic accumulator.

use crate::kinds::Diagnostic;
use crate::policy::LintPolicy;
use crate::reporter::Reporter;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A reporter that collects diagnostics for later inspection.
///
/// Multiple threads can report concurrently. The error count is tracked
/// atomically for fast `has_errors` checks without locking the diagnostic
/// vector. A [`LintPolicy`] decides which diagnostics are kept and the
/// severity each is kept at.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    reported: Mutex<Vec<(Diagnostic, Severity)>>,
    error_count: AtomicUsize,
    policy: LintPolicy,
}

impl DiagnosticSink {
    /// Creates a new empty sink that keeps every diagnostic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty sink that filters through `policy`.
    pub fn with_policy(policy: LintPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns `true` if any error-severity diagnostics have been reported.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns the number of error-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    ///
    /// The error count is not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        self.take_reported()
            .into_iter()
            .map(|(diagnostic, _)| diagnostic)
            .collect()
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .map(|(diagnostic, _)| diagnostic.clone())
            .collect()
    }

    /// Takes every accumulated diagnostic paired with the severity the
    /// policy reported it at, leaving the sink empty.
    pub fn take_reported(&self) -> Vec<(Diagnostic, Severity)> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a snapshot of every diagnostic paired with its reported severity.
    pub fn reported(&self) -> Vec<(Diagnostic, Severity)> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Diagnostic, Severity)>> {
        // A panicking reporter thread cannot leave the vector half-pushed.
        self.reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic) {
        let Some(severity) = self.policy.effective_severity(&diagnostic) else {
            return;
        };
        if severity.is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.lock().push((diagnostic, severity));
    }
}
