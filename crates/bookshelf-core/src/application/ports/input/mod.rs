//! Driving (input) ports - implemented by the application.

use async_trait::async_trait;

use crate::application::services::BookCreation;
use crate::domain::BookRequest;
use crate::error::BookshelfResult;

/// Entry point for the create-book use case.
///
/// Routers depend on this trait rather than on `CreateBookUseCase` so they
/// can be exercised with any implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateBook: Send + Sync {
    async fn execute(&self, request: BookRequest) -> BookshelfResult<BookCreation>;
}
