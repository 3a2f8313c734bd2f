//! Unified error handling for Bookshelf Core.
//!
//! Wraps domain and application errors behind one type so ports, use cases
//! and adapters can share a single `Result` alias.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorPayload};

/// Root error type for Bookshelf Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookshelfError {
    /// Errors from the domain layer (book rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BookshelfError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(DomainError::MissingParam { param }) => vec![
                format!("Provide a value for '{}'", param),
                "Required fields: title, publisher, photo, authors".into(),
            ],
            Self::Domain(DomainError::InvalidParam { param }) => {
                vec![format!("Check the value supplied for '{}'", param)]
            }
            Self::Domain(DomainError::ResourceConflict { name, .. }) => vec![
                format!("A book titled '{}' already exists", name),
                "Choose a different title".into(),
            ],
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in Bookshelf".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Structured body describing this error.
    ///
    /// Internal errors collapse to the generic server error so their message
    /// never reaches a caller.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            Self::Domain(e) => e.payload(),
            Self::Application(e) => e.payload(),
            Self::Internal { .. } => ErrorPayload::server_error(),
        }
    }
}

/// Error categories for status, exit-code and display mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Dependency,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BookshelfResult<T> = Result<T, BookshelfError>;
