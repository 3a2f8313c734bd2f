//! In-memory book repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use bookshelf_core::{
    application::{
        ApplicationError,
        ports::{AddBookRepository, FindBookByTitleRepository},
    },
    domain::{BookId, BookRecord, BookRequest, DomainError},
    error::BookshelfResult,
};

/// Name this adapter reports when its storage fails.
const REPOSITORY_NAME: &str = "inMemoryBookRepository";

/// In-memory book repository, serving as both the title lookup and the
/// writer. Clones share storage.
///
/// `find` and `add` each take the lock on their own, so a lookup followed by
/// an add is not atomic. Titles stay unique only while requests are routed
/// one at a time.
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    inner: Arc<RwLock<Vec<BookRecord>>>,
}

impl InMemoryBookRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository preloaded with `seed` books.
    ///
    /// Every seed must carry all four fields; the first incomplete one is
    /// rejected as `Invalid param: seed[<index>].<field>`.
    pub fn with_seed(seed: impl IntoIterator<Item = BookRequest>) -> BookshelfResult<Self> {
        let repository = Self::new();
        {
            let mut inner = repository.write()?;
            for (index, book) in seed.into_iter().enumerate() {
                if let Some(field) = book.first_missing() {
                    return Err(DomainError::invalid_param(format!("seed[{index}].{field}")).into());
                }
                inner.push(Self::record(&book));
            }
        }
        Ok(repository)
    }

    #[cfg(test)]
    fn list(&self) -> BookshelfResult<Vec<BookRecord>> {
        Ok(self.read()?.clone())
    }

    fn record(book: &BookRequest) -> BookRecord {
        BookRecord::from_request(BookId::new(Uuid::new_v4().to_string()), book, Utc::now())
    }

    fn read(&self) -> BookshelfResult<RwLockReadGuard<'_, Vec<BookRecord>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::dependency(REPOSITORY_NAME).into())
    }

    fn write(&self) -> BookshelfResult<RwLockWriteGuard<'_, Vec<BookRecord>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::dependency(REPOSITORY_NAME).into())
    }
}

#[async_trait]
impl FindBookByTitleRepository for InMemoryBookRepository {
    async fn find(&self, title: &str) -> BookshelfResult<Option<BookId>> {
        let inner = self.read()?;
        let found = inner
            .iter()
            .find(|record| record.title == title)
            .map(|record| record.id.clone());

        debug!(title, found = found.is_some(), "Title lookup");
        Ok(found)
    }
}

#[async_trait]
impl AddBookRepository for InMemoryBookRepository {
    async fn add(&self, book: &BookRequest) -> BookshelfResult<()> {
        let record = Self::record(book);
        debug!(book_id = %record.id, title = %record.title, "Storing book");
        self.write()?.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookRequest {
        BookRequest::new("Dune", "Ace", "url", ["Herbert"])
    }

    #[tokio::test]
    async fn added_book_is_found_by_title() {
        let repository = InMemoryBookRepository::new();
        assert_eq!(repository.find("Dune").await.unwrap(), None);

        repository.add(&dune()).await.unwrap();

        let id = repository.find("Dune").await.unwrap();
        assert!(id.is_some_and(|id| !id.is_empty()));
        assert_eq!(repository.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stored_record_keeps_fields_unmodified() {
        let repository = InMemoryBookRepository::new();
        repository.add(&dune()).await.unwrap();

        let records = repository.list().unwrap();
        assert_eq!(records[0].title, "Dune");
        assert_eq!(records[0].publisher, "Ace");
        assert_eq!(records[0].photo, "url");
        assert_eq!(records[0].authors, vec!["Herbert".to_string()]);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let repository = InMemoryBookRepository::new();
        repository.add(&dune()).await.unwrap();
        repository
            .add(&BookRequest::new("Emma", "Murray", "url", ["Austen"]))
            .await
            .unwrap();

        let records = repository.list().unwrap();
        assert_ne!(records[0].id, records[1].id);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repository = InMemoryBookRepository::new();
        let clone = repository.clone();
        clone.add(&dune()).await.unwrap();
        assert!(repository.find("Dune").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn seed_is_loaded() {
        let repository = InMemoryBookRepository::with_seed([dune()]).unwrap();
        assert!(repository.find("Dune").await.unwrap().is_some());
    }

    #[test]
    fn incomplete_seed_is_rejected() {
        let incomplete = BookRequest {
            photo: String::new(),
            ..dune()
        };
        let err = InMemoryBookRepository::with_seed([dune(), incomplete])
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Invalid param: seed[1].photo");
    }

    #[tokio::test]
    async fn add_does_not_check_titles() {
        let repository = InMemoryBookRepository::new();
        repository.add(&dune()).await.unwrap();
        repository.add(&dune()).await.unwrap();
        assert_eq!(repository.list().unwrap().len(), 2);
    }
}
