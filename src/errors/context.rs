//! Error context enhancement utilities
//!
//! Adds operation context to foreign error types while converting them into
//! `AppError`, similar to anyhow's `context` but keeping the source chain typed.

use std::path::PathBuf;
use super::types::AppError;

/// Extension trait for adding context to error types
pub trait ErrorContextExt<T> {
    /// Add operation context to the error
    fn with_context(self, operation: impl Into<String>) -> Result<T, AppError>;

    /// Add operation and file context
    fn in_file_operation(
        self,
        path: impl Into<PathBuf>,
        operation: impl Into<String>
    ) -> Result<T, AppError>;
}

impl<T, E> ErrorContextExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context(self, operation: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| {
            let operation = operation.into();
            AppError::Other {
                message: format!("{}: {}", operation, e),
                source: Some(Box::new(e)),
            }
        })
    }

    fn in_file_operation(
        self,
        path: impl Into<PathBuf>,
        operation: impl Into<String>
    ) -> Result<T, AppError> {
        self.map_err(|e| AppError::io_with_source(path, operation, e))
    }
}
