//! Error types for the local-notify crate
//!
//! This module defines all error conditions raised while parsing options,
//! building notifications, and managing configuration, organized by
//! functional domain with proper source chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
///
/// Covers every failure the library can surface: malformed options,
/// callback-token allocation, configuration handling, and the I/O and
/// serialization plumbing underneath them.
#[derive(Error, Debug)]
pub enum AppError {
    // Options errors
    #[error("Options error: {message}")]
    Options {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid value for option '{key}': {value}")]
    InvalidOptionValue {
        key: String,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Build errors
    #[error("Notification build failed for id {id}: {message}")]
    Build {
        id: i32,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Callback-token errors
    #[error("Callback token table is full ({capacity} tokens issued)")]
    TokenLimit { capacity: usize },

    #[error("Callback token error: {message}")]
    Token {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration value for '{key}': {value}")]
    InvalidConfigValue {
        key: String,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // I/O errors
    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Serialization errors
    #[error("JSON serialization error: {context}")]
    JsonSerialization {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("JSON deserialization error: {context}")]
    JsonDeserialization {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("TOML parsing error: {context}")]
    TomlParsing {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Generic/catch-all errors
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Options error
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Options error with source
    pub fn options_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Options {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Build error
    pub fn build(id: i32, message: impl Into<String>) -> Self {
        Self::Build {
            id,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Token error
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Options { .. } | Self::InvalidOptionValue { .. } => "options",
            Self::Build { .. } => "build",
            Self::TokenLimit { .. } | Self::Token { .. } => "token",
            Self::Config { .. } | Self::ConfigNotFound { .. } | Self::InvalidConfigValue { .. } => {
                "config"
            }
            Self::Io { .. } => "io",
            Self::JsonSerialization { .. }
            | Self::JsonDeserialization { .. }
            | Self::TomlParsing { .. } => "serialization",
            Self::Internal { .. } | Self::Other { .. } => "internal",
        }
    }

    /// Whether a degraded notification can still be produced despite this error
    ///
    /// Resource-resolution failures are recoverable by omitting the field;
    /// token-table exhaustion is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Options { .. } | Self::InvalidOptionValue { .. } | Self::Token { .. }
        )
    }
}

// Conversions from common standard library and third-party error types

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let operation = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found",
            std::io::ErrorKind::PermissionDenied => "permission denied",
            _ => "I/O operation",
        }
        .to_string();

        Self::Io {
            path: PathBuf::from("unknown"),
            operation,
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() {
            Self::JsonDeserialization {
                context: format!(
                    "JSON syntax error at line {} column {}",
                    err.line(),
                    err.column()
                ),
                source: Some(Box::new(err)),
            }
        } else if err.is_data() {
            Self::JsonDeserialization {
                context: "JSON data error".to_string(),
                source: Some(Box::new(err)),
            }
        } else if err.is_eof() {
            Self::JsonDeserialization {
                context: "Unexpected end of JSON input".to_string(),
                source: Some(Box::new(err)),
            }
        } else {
            Self::JsonSerialization {
                context: "JSON serialization error".to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlParsing {
            context: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = AppError::config("test config error");
        assert_eq!(err.to_string(), "Configuration error: test config error");
    }

    #[test]
    fn test_error_category() {
        let options_err = AppError::options("bad color");
        assert_eq!(options_err.category(), "options");

        let build_err = AppError::build(7, "test error");
        assert_eq!(build_err.category(), "build");

        let limit_err = AppError::TokenLimit { capacity: 4 };
        assert_eq!(limit_err.category(), "token");
    }

    #[test]
    fn test_recoverable_errors() {
        let options_err = AppError::options("bad led spec");
        assert!(options_err.is_recoverable());

        let limit_err = AppError::TokenLimit { capacity: 4 };
        assert!(!limit_err.is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();

        match app_err {
            AppError::Io { operation, .. } => {
                assert_eq!(operation, "file not found");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.category(), "serialization");
    }
}
