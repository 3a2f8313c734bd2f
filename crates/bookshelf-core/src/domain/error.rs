// ============================================================================
// domain/error.rs - BOOK DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ErrorPayload;

/// Root domain error type.
///
/// The `Display` output of every variant is part of the public contract:
/// routers copy it verbatim into response bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Missing param: {param}")]
    MissingParam { param: String },

    #[error("Invalid param: {param}")]
    InvalidParam { param: String },

    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("Resource already exists. Type: {resource_type}; Name: {name}")]
    ResourceConflict { resource_type: String, name: String },
}

impl DomainError {
    pub fn missing_param(param: impl Into<String>) -> Self {
        Self::MissingParam {
            param: param.into(),
        }
    }

    pub fn invalid_param(param: impl Into<String>) -> Self {
        Self::InvalidParam {
            param: param.into(),
        }
    }

    pub fn resource_conflict(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ResourceConflict {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Error name as exposed to transport callers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "MissingParamError",
            Self::InvalidParam { .. } => "InvalidParamError",
            Self::ResourceConflict { .. } => "ResourceConflictError",
        }
    }

    /// Error category for status and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParam { .. } | Self::InvalidParam { .. } => ErrorCategory::Validation,
            Self::ResourceConflict { .. } => ErrorCategory::Conflict,
        }
    }

    /// Structured body for this error.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.name(), self.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
