//! Stable diagnostic codes used for documentation and suppression.

use crate::kinds::DiagnosticKind;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A diagnostic code such as `E057`.
///
/// Codes are part of the public contract: they appear in documentation,
/// suppression lists, and test fixtures. A code is never reassigned to a
/// different kind, and a retired kind retires its code with it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DiagnosticCode(&'static str);

impl DiagnosticCode {
    /// Creates a diagnostic code. Only the diagnostic table calls this.
    pub(crate) const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// Returns the code as written, e.g. `"E057"`.
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns the diagnostic kind this code identifies.
    pub fn kind(self) -> DiagnosticKind {
        DiagnosticKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == self)
            .unwrap_or_else(|| unreachable!("code {} is not in the diagnostic table", self.0))
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Returned when parsing a code that no diagnostic kind uses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic code '{0}'")]
pub struct UnknownCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosticKind::from_code(s.trim())
            .map(DiagnosticKind::code)
            .ok_or_else(|| UnknownCodeError(s.to_string()))
    }
}
