//! # Error Types
//!
//! Configuration is the only fallible surface. Runtime behaviour never
//! returns errors: missing references degrade to a no-op.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for the target type.
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but a value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
