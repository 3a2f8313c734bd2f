//! Application services - orchestrate use cases.

pub mod create_book;

pub use create_book::{BookCreation, CreateBookUseCase, CreateBookUseCaseBuilder};
