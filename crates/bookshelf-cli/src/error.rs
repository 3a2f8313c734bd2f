//! Error handling for the Bookshelf CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use bookshelf_core::domain::ErrorPayload;
use bookshelf_core::error::BookshelfError;
use bookshelf_core::presentation::HttpStatus;

// Re-export so callers only need `use crate::error::*`.
pub use bookshelf_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The router answered with something other than 200.
    #[error("{status}: {}", payload.message)]
    Rejected {
        status: HttpStatus,
        payload: ErrorPayload,
    },

    /// A replay file could not be read or parsed.
    #[error("Cannot read requests from {}: {message}", path.display())]
    RequestFile {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `replay --strict` saw at least one non-200 response.
    #[error("{failed} of {total} requests were not accepted")]
    ReplayIncomplete { failed: usize, total: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `bookshelf-core` while wiring the router.
    #[error("Setup failed: {0}")]
    Core(#[from] BookshelfError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::Rejected { status, .. } => match status {
                HttpStatus::BadRequest => vec![
                    "Required fields: --title, --publisher, --photo, --author".into(),
                    "Example: bookshelf add -t Dune -p Ace --photo url -a 'Frank Herbert'".into(),
                ],
                HttpStatus::Conflict => vec![
                    "Titles are unique within one store".into(),
                    "Choose a different title".into(),
                ],
                _ => vec!["Re-run with -v to see what failed".into()],
            },

            Self::RequestFile { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "The file must hold a JSON array of request bodies or nulls".into(),
                "Example: [{\"title\": \"Dune\", \"publisher\": \"Ace\", \"photo\": \"url\", \"authors\": [\"Herbert\"]}, null]".into(),
            ],

            Self::ReplayIncomplete { .. } => vec![
                "Inspect the responses printed above".into(),
                "Drop --strict to report without failing".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active file with 'bookshelf config path'".into(),
                "Environment overrides use the BOOKSHELF_ prefix, e.g. BOOKSHELF_OUTPUT__FORMAT=json".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::Rejected { status, .. } => match status {
                HttpStatus::BadRequest => ErrorCategory::UserError,
                HttpStatus::Conflict => ErrorCategory::Conflict,
                HttpStatus::Ok | HttpStatus::ServerError => ErrorCategory::Internal,
            },
            Self::RequestFile { .. } => ErrorCategory::UserError,
            Self::ReplayIncomplete { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::Configuration,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Dependency | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Conflict      |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Conflict => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Report for stderr: the message, its causes under `-v`, then hints.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let headline = format!("error: {self}");
        let mut lines = vec![if color {
            headline.red().bold().to_string()
        } else {
            headline
        }];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(format!("  caused by: {err}"));
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            lines.push(String::new());
            lines.push(if color {
                "hint:".yellow().bold().to_string()
            } else {
                "hint:".to_string()
            });
            lines.extend(hints.into_iter().map(|hint| format!("  {hint}")));
        }

        if !verbose && self.source().is_some() {
            lines.push(String::new());
            lines.push("Run again with -v to see the cause.".to_string());
        }

        lines.join("\n") + "\n"
    }

    /// Emit one event at the category's severity.
    pub fn log(&self) {
        let exit_code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Conflict => {
                tracing::warn!(exit_code, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code, "{self}")
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing fields, unreadable request file).
    UserError,
    /// The book already exists.
    Conflict,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
