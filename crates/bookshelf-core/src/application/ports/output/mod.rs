//! Driven (output) ports - implemented by infrastructure.
//!
//! The `bookshelf-adapters` crate provides implementations. Both ports are
//! async: a call may suspend, and the use case awaits it before moving on.

use async_trait::async_trait;

use crate::domain::{BookId, BookRequest};
use crate::error::BookshelfResult;

/// Port for looking up an existing book by its title.
///
/// Implemented by:
/// - `bookshelf_adapters::InMemoryBookRepository`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FindBookByTitleRepository: Send + Sync {
    /// Id of the book stored under `title`, or `None` when there is none.
    ///
    /// An empty id is treated the same as `None` by callers.
    async fn find(&self, title: &str) -> BookshelfResult<Option<BookId>>;
}

/// Port for persisting a new book.
///
/// Implemented by:
/// - `bookshelf_adapters::InMemoryBookRepository`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddBookRepository: Send + Sync {
    /// Store `book`. Fields are passed through unmodified.
    async fn add(&self, book: &BookRequest) -> BookshelfResult<()>;
}
