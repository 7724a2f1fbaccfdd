//! Errors raised by the diagnostics crate itself

use thiserror::Error;

/// Failures while loading report configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed or did not match the schema
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Name does not match any exception kind
    #[error("Unknown exception kind: {0}")]
    UnknownKind(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
