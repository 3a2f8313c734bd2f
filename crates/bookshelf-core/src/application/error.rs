//! Application layer errors.
//!
//! These errors represent failures in orchestration and wiring, not book
//! rules. Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::ErrorPayload;
use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a use case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A named collaborator failed internally.
    #[error("The following dependency exited with an error: {name}")]
    Dependency { name: String },

    /// A required collaborator was never supplied when wiring a use case.
    #[error("Missing param: {name}")]
    MissingDependency { name: &'static str },
}

impl ApplicationError {
    pub fn dependency(name: impl Into<String>) -> Self {
        Self::Dependency { name: name.into() }
    }

    /// Error name as exposed to transport callers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dependency { .. } => "DepError",
            Self::MissingDependency { .. } => "MissingParamError",
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Dependency { name } => vec![
                format!("Collaborator '{}' failed", name),
                "Re-run with -v for the underlying cause".into(),
            ],
            Self::MissingDependency { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a wiring error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Dependency { .. } => ErrorCategory::Dependency,
            Self::MissingDependency { .. } => ErrorCategory::Configuration,
        }
    }

    /// Structured body for this error.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.name(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_message() {
        let err = ApplicationError::dependency("addBookRepository");
        assert_eq!(
            err.to_string(),
            "The following dependency exited with an error: addBookRepository"
        );
        assert_eq!(err.name(), "DepError");
    }

    #[test]
    fn missing_dependency_uses_missing_param_wording() {
        let err = ApplicationError::MissingDependency {
            name: "findBookByTitleRepository",
        };
        assert_eq!(err.to_string(), "Missing param: findBookByTitleRepository");
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
