//! Error types for the fcm-push tool
//!
//! This module defines the error conditions that can occur while loading
//! configuration, minting an access token and talking to FCM.

use thiserror::Error;
use std::path::PathBuf;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        path: PathBuf,
    },

    // Authentication errors
    #[error("Unable to load service account key '{path}': {reason}")]
    Credentials {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to obtain access token: {message}")]
    TokenFetch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // CLI errors
    #[error("Invalid command argument '{argument}': {reason}")]
    InvalidArgument {
        argument: String,
        reason: String,
    },

    // Network errors
    #[error("HTTP request failed: {method} {url}")]
    HttpRequest {
        method: String,
        url: String,
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

    /// Create a new Credentials error with source
    pub fn credentials_with_source(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Credentials {
            path: path.into(),
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new TokenFetch error
    pub fn token_fetch(message: impl Into<String>) -> Self {
        Self::TokenFetch {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new TokenFetch error with source
    pub fn token_fetch_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::TokenFetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new HttpRequest error with source
    pub fn http_request_with_source(
        method: impl Into<String>,
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::HttpRequest {
            method: method.into(),
            url: url.into(),
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

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } | Self::ConfigNotFound { .. } => "config",
            Self::Credentials { .. } | Self::TokenFetch { .. } => "auth",
            Self::InvalidArgument { .. } => "cli",
            Self::HttpRequest { .. } => "network",
            Self::Io { .. } => "io",
            Self::JsonSerialization { .. } => "serialization",
            Self::Other { .. } => "internal",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonSerialization {
            context: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::config_with_source("invalid FCM base URL", err)
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
        assert_eq!(AppError::config("test").category(), "config");
        assert_eq!(AppError::token_fetch("no token").category(), "auth");

        let arg_err = AppError::InvalidArgument {
            argument: "--message".to_string(),
            reason: "unknown".to_string(),
        };
        assert_eq!(arg_err.category(), "cli");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.category(), "serialization");
    }

    #[test]
    fn test_url_error_is_config() {
        let app_err: AppError = url::Url::parse("::").unwrap_err().into();
        assert_eq!(app_err.category(), "config");
    }

    #[test]
    fn test_credentials_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::credentials_with_source("/tmp/key.json", "read failed", io_err);
        assert!(err.to_string().contains("/tmp/key.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
