//! Infrastructure adapters for Bookshelf.
//!
//! This crate implements the ports defined in `bookshelf-core::application::ports`.

pub mod book_store;

// Re-export commonly used adapters
pub use book_store::InMemoryBookRepository;
