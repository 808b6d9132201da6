//! Error context enhancement utilities
//!
//! This module provides traits for enhancing errors with additional
//! context information, making failures during config and options
//! handling easier to trace.

use super::types::AppError;
use std::path::PathBuf;

/// Error context information
///
/// Holds additional context that can be attached to errors to describe
/// the circumstances when the error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub operation: String,
    pub component: Option<String>,
    pub file_path: Option<PathBuf>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: None,
            file_path: None,
        }
    }

    /// Add component information
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Add file path information
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Render the context for error messages
    pub fn render(&self) -> String {
        let mut parts = vec![self.operation.clone()];

        if let Some(ref component) = self.component {
            parts.push(format!("component: {}", component));
        }

        if let Some(ref path) = self.file_path {
            parts.push(format!("file: {}", path.display()));
        }

        parts.join(" | ")
    }
}

/// Extension trait for adding context to error types
///
/// Provides convenient methods for enhancing errors with contextual
/// information, similar to anyhow's context functionality but producing
/// structured AppError values.
pub trait ErrorContextExt<T> {
    /// Add operation context to the error
    fn with_context(self, operation: impl Into<String>) -> Result<T, AppError>;

    /// Add operation and file context
    fn in_file_operation(
        self,
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
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
        operation: impl Into<String>,
    ) -> Result<T, AppError> {
        let path = path.into();
        let operation = operation.into();
        self.map_err(|e| AppError::Io {
            path,
            operation,
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_render() {
        let ctx = ErrorContext::new("loading options")
            .with_component("builder")
            .with_file_path("notification.json");

        let rendered = ctx.render();
        assert!(rendered.contains("loading options"));
        assert!(rendered.contains("component: builder"));
        assert!(rendered.contains("notification.json"));
    }

    #[test]
    fn test_with_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_context("reading options file").unwrap_err();
        assert!(err.to_string().contains("reading options file"));
    }

    #[test]
    fn test_in_file_operation() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .in_file_operation("config.toml", "writing defaults")
            .unwrap_err();

        match err {
            AppError::Io { operation, .. } => assert_eq!(operation, "writing defaults"),
            _ => panic!("Wrong error type"),
        }
    }
}
