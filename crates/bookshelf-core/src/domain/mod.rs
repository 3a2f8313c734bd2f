// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Bookshelf.
//!
//! Pure book rules with no I/O. Collaborators are reached only through the
//! ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No storage, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::book::{BookRecord, BookRequest};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BookField, BookId, ErrorPayload};

pub use validation::DomainValidator;
