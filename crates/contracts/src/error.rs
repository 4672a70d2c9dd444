//! Layered error definitions
//!
//! Categorized by source: file / parse / lookup

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ConfigError {
    // ===== File Errors =====
    /// Configuration file does not exist
    #[error("config file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration file exists but could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===== Parse Errors =====
    /// Malformed YAML, or a document that is not a mapping
    #[error("config parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ===== Lookup Errors =====
    /// Required key absent from the document
    #[error("missing required key '{key}'")]
    MissingKey { key: String },

    /// Key present but its value cannot be used
    #[error("invalid data at '{key}': {message}")]
    InvalidData { key: String, message: String },
}

impl ConfigError {
    /// Create parse error without an underlying source
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create invalid data error
    pub fn invalid_data(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Classify an IO error raised while reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type alias for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;
