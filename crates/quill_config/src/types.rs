//! Configuration types deserialized from `quill.toml`.

use serde::Deserialize;

/// Default capacity of the event loop's read buffer, in bytes.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// The top-level configuration parsed from `quill.toml`.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuillConfig {
    /// Lint settings (allowed and denied diagnostic codes).
    #[serde(default)]
    pub lint: LintConfig,
    /// Event loop settings.
    #[serde(default)]
    pub event_loop: EventLoopConfig,
}

/// Per-code lint policy.
///
/// Codes are written as they appear in diagnostics, e.g. `"E057"`. Whether a
/// code exists is checked by the diagnostics crate when the policy is built.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Diagnostic codes that should be promoted to error severity.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Diagnostic codes that should be suppressed (not reported).
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Tuning for the byte-stream event loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventLoopConfig {
    /// Maximum number of bytes read from the pipe per iteration.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

fn default_read_buffer_size() -> usize {
    DEFAULT_READ_BUFFER_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = QuillConfig::default();
        assert!(config.lint.deny.is_empty());
        assert!(config.lint.allow.is_empty());
        assert_eq!(config.event_loop.read_buffer_size, DEFAULT_READ_BUFFER_SIZE);
    }

    #[test]
    fn empty_sections_use_defaults() {
        let config: QuillConfig = toml::from_str("[lint]\n[event_loop]\n").unwrap();
        assert!(config.lint.allow.is_empty());
        assert_eq!(config.event_loop.read_buffer_size, 1024);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<QuillConfig, _> = toml::from_str("[lint]\nignore = [\"E001\"]\n");
        assert!(result.is_err());
    }
}
