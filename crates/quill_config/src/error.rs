//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `quill.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `quill.toml` could not be read.
    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),

    /// `quill.toml` is not valid TOML or does not match the expected tables.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `[event_loop] read_buffer_size` was set to zero.
    #[error("event_loop.read_buffer_size must be greater than zero")]
    ZeroReadBuffer,

    /// A diagnostic code appears in both `[lint] allow` and `[lint] deny`.
    #[error("code '{0}' is both allowed and denied")]
    ConflictingCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_code_names_the_code() {
        let err = ConfigError::ConflictingCode("E034".to_string());
        assert_eq!(err.to_string(), "code 'E034' is both allowed and denied");
    }

    #[test]
    fn zero_read_buffer_names_the_key() {
        assert_eq!(
            ConfigError::ZeroReadBuffer.to_string(),
            "event_loop.read_buffer_size must be greater than zero"
        );
    }

    #[test]
    fn parse_error_wraps_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("lint = [").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("failed to parse configuration:"));
    }

    #[test]
    fn read_error_wraps_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "quill.toml");
        let err = ConfigError::from(io_err);
        assert_eq!(err.to_string(), "failed to read configuration: quill.toml");
    }
}
