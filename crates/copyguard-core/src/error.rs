//! Error types for Copyguard

use thiserror::Error;

/// Errors raised at the file and configuration boundaries.
///
/// Parsing, validation and repair are total and never produce one of these.
#[derive(Debug, Error)]
pub enum CopyguardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for Copyguard operations
pub type Result<T> = std::result::Result<T, CopyguardError>;

impl From<toml::de::Error> for CopyguardError {
    fn from(err: toml::de::Error) -> Self {
        CopyguardError::TomlParseError(err.to_string())
    }
}

impl From<serde_json::Error> for CopyguardError {
    fn from(err: serde_json::Error) -> Self {
        CopyguardError::JsonParseError(err.to_string())
    }
}
