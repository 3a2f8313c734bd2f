//! Command handlers. One module per subcommand.

pub mod add;
pub mod completions;
pub mod config;
pub mod replay;

use std::sync::Arc;

use tracing::debug;

use bookshelf_adapters::InMemoryBookRepository;
use bookshelf_core::prelude::*;

use crate::{config::AppConfig, error::CliResult};

/// Wire the router over a fresh in-memory store holding the configured seed.
///
/// One store backs both the title lookup and the writer, so every request
/// routed through the returned router sees the writes of earlier ones.
pub fn build_router(config: &AppConfig) -> CliResult<BookCreationRouter> {
    let repository = InMemoryBookRepository::with_seed(config.store.seed.iter().cloned())?;
    debug!(seeded = config.store.seed.len(), "Book store ready");

    let use_case = CreateBookUseCase::builder()
        .find_book_by_title_repository(Arc::new(repository.clone()))
        .add_book_repository(Arc::new(repository))
        .build()?;

    Ok(BookCreationRouter::new(Arc::new(use_case)))
}
