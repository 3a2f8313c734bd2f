//! Application layer for Bookshelf.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CreateBookUseCase)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Book rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BookCreation, CreateBookUseCase, CreateBookUseCaseBuilder};

// Re-export port traits (for adapter implementation)
pub use ports::{AddBookRepository, CreateBook, FindBookByTitleRepository};

pub use error::ApplicationError;
