//! Bookshelf Core - Hexagonal Architecture Implementation
//!
//! Domain, application and presentation layers for creating book
//! resources, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     Presentation (BookCreationRouter)   │
//! │   HttpRequest in, HttpResponse out      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls (CreateBook)
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (CreateBookUseCase)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (FindBookByTitle, AddBook repositories) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   bookshelf-adapters (Infrastructure)   │
//! │        (InMemoryBookRepository)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookshelf_core::prelude::*;
//!
//! let use_case = CreateBookUseCase::new(repository.clone(), repository);
//! let router = BookCreationRouter::new(Arc::new(use_case));
//!
//! let response = router.route(Some(HttpRequest::new(body))).await;
//! assert_eq!(response.status_code(), HttpStatus::Ok);
//! ```

pub mod domain;

pub mod application;

pub mod presentation;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BookCreation, CreateBookUseCase, CreateBookUseCaseBuilder,
        ports::{AddBookRepository, CreateBook, FindBookByTitleRepository},
    };
    pub use crate::domain::{BookField, BookId, BookRecord, BookRequest, ErrorPayload};
    pub use crate::error::{BookshelfError, BookshelfResult};
    pub use crate::presentation::{
        BookCreationRouter, BookRequestBody, HttpRequest, HttpResponse, HttpStatus,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
