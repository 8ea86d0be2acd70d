//! Parsing and validation of `quill.toml` configuration files.
//!
//! This crate reads the linter configuration file and produces a strongly-typed
//! [`QuillConfig`] holding lint policy lists and event-loop tuning.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
