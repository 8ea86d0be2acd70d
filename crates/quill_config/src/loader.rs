//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::QuillConfig;
use std::path::Path;

/// The name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Loads and validates a `quill.toml` configuration from a project directory.
///
/// Reads `<project_dir>/quill.toml`, parses it, and validates its values.
pub fn load_config(project_dir: &Path) -> Result<QuillConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `quill.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<QuillConfig, ConfigError> {
    let config: QuillConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are consistent.
fn validate_config(config: &QuillConfig) -> Result<(), ConfigError> {
    if config.event_loop.read_buffer_size == 0 {
        return Err(ConfigError::ZeroReadBuffer);
    }
    if let Some(code) = config
        .lint
        .deny
        .iter()
        .find(|code| config.lint.allow.contains(code))
    {
        return Err(ConfigError::ConflictingCode(code.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.lint.allow.is_empty());
        assert_eq!(config.event_loop.read_buffer_size, 1024);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[lint]
deny = ["E059"]
allow = ["E057", "E034"]

[event_loop]
read_buffer_size = 4096
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.lint.deny, vec!["E059"]);
        assert_eq!(config.lint.allow, vec!["E057", "E034"]);
        assert_eq!(config.event_loop.read_buffer_size, 4096);
    }

    #[test]
    fn zero_buffer_size_errors() {
        let toml = r#"
[event_loop]
read_buffer_size = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroReadBuffer));
    }

    #[test]
    fn allowed_and_denied_errors() {
        let toml = r#"
[lint]
deny = ["E057"]
allow = ["E057"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        match err {
            ConfigError::ConflictingCode(code) => assert_eq!(code, "E057"),
            other => panic!("expected ConflictingCode, got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[lint]\nallow = [\"E057\"]\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.lint.allow, vec!["E057"]);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
