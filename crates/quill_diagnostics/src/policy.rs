//! Per-code suppression and promotion configured in `quill.toml`.

use crate::code::{DiagnosticCode, UnknownCodeError};
use crate::kinds::{Diagnostic, DiagnosticKind};
use crate::severity::Severity;
use quill_config::LintConfig;
use std::collections::HashSet;

/// Decides which diagnostics are reported and at what severity.
///
/// Allowed kinds are dropped; denied kinds are reported as errors. Every
/// other kind keeps the severity its table entry declares.
#[derive(Clone, Debug, Default)]
pub struct LintPolicy {
    allowed: HashSet<DiagnosticKind>,
    denied: HashSet<DiagnosticKind>,
}

impl LintPolicy {
    /// Creates a policy that reports every kind at its declared severity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a policy from the `[lint]` section of the configuration.
    ///
    /// Fails on the first code that no diagnostic kind uses.
    pub fn from_config(config: &LintConfig) -> Result<Self, UnknownCodeError> {
        let mut policy = Self::new();
        for code in &config.allow {
            policy.allowed.insert(code.parse::<DiagnosticCode>()?.kind());
        }
        for code in &config.deny {
            policy.denied.insert(code.parse::<DiagnosticCode>()?.kind());
        }
        Ok(policy)
    }

    /// Suppresses `kind`.
    pub fn allow(mut self, kind: DiagnosticKind) -> Self {
        self.denied.remove(&kind);
        self.allowed.insert(kind);
        self
    }

    /// Promotes `kind` to error severity.
    pub fn deny(mut self, kind: DiagnosticKind) -> Self {
        self.allowed.remove(&kind);
        self.denied.insert(kind);
        self
    }

    /// Returns the severity `kind` is reported at, or `None` if it is suppressed.
    pub fn severity_of(&self, kind: DiagnosticKind) -> Option<Severity> {
        if self.allowed.contains(&kind) {
            None
        } else if self.denied.contains(&kind) {
            Some(Severity::Error)
        } else {
            Some(kind.severity())
        }
    }

    /// Returns the severity `diagnostic` is reported at, or `None` if it is suppressed.
    pub fn effective_severity(&self, diagnostic: &Diagnostic) -> Option<Severity> {
        self.severity_of(diagnostic.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(allow: &[&str], deny: &[&str]) -> LintConfig {
        LintConfig {
            allow: allow.iter().map(|s| s.to_string()).collect(),
            deny: deny.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn default_policy_keeps_declared_severity() {
        let policy = LintPolicy::new();
        for &kind in DiagnosticKind::ALL {
            assert_eq!(policy.severity_of(kind), Some(kind.severity()));
        }
    }

    #[test]
    fn allow_and_deny_from_config() {
        let policy = LintPolicy::from_config(&config(&["E057"], &["E059"])).unwrap();
        assert_eq!(policy.severity_of(DiagnosticKind::UseOfUndeclaredVariable), None);
        assert_eq!(
            policy.severity_of(DiagnosticKind::AssignmentToUndeclaredVariable),
            Some(Severity::Error)
        );
        assert_eq!(
            policy.severity_of(DiagnosticKind::UnexpectedToken),
            Some(Severity::Error)
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = LintPolicy::from_config(&config(&[], &["E999"])).unwrap_err();
        assert_eq!(err, UnknownCodeError("E999".to_string()));
    }

    #[test]
    fn builder_methods_override_each_other() {
        let kind = DiagnosticKind::UseOfUndeclaredVariable;
        let policy = LintPolicy::new().allow(kind).deny(kind);
        assert_eq!(policy.severity_of(kind), Some(Severity::Error));
        let policy = policy.allow(kind);
        assert_eq!(policy.severity_of(kind), None);
    }
}
