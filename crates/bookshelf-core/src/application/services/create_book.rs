//! Create Book use case.
//!
//! Workflow:
//! 1. Validate the request (title, publisher, photo, authors; first miss wins)
//! 2. Ask the lookup collaborator whether the title is taken
//! 3. Persist through the writer collaborator unless it is
//!
//! Collaborator errors are returned untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{AddBookRepository, CreateBook, FindBookByTitleRepository},
    },
    domain::{BookRequest, DomainValidator as validator},
    error::BookshelfResult,
};

/// Outcome of a create-book request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCreation {
    /// The book was written.
    Created,
    /// A book with the same title already existed; nothing was written.
    AlreadyExists,
}

impl BookCreation {
    pub const fn created(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Creates a book unless one with the same title already exists.
pub struct CreateBookUseCase {
    find_book_by_title_repository: Arc<dyn FindBookByTitleRepository>,
    add_book_repository: Arc<dyn AddBookRepository>,
}

impl CreateBookUseCase {
    /// Create the use case with its two collaborators.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use bookshelf_core::application::CreateBookUseCase;
    ///
    /// let use_case = CreateBookUseCase::new(
    ///     repository.clone(), // impl FindBookByTitleRepository
    ///     repository,         // impl AddBookRepository
    /// );
    /// ```
    pub fn new(
        find_book_by_title_repository: Arc<dyn FindBookByTitleRepository>,
        add_book_repository: Arc<dyn AddBookRepository>,
    ) -> Self {
        Self {
            find_book_by_title_repository,
            add_book_repository,
        }
    }

    /// Start wiring a use case whose collaborators are resolved at runtime.
    pub fn builder() -> CreateBookUseCaseBuilder {
        CreateBookUseCaseBuilder::default()
    }
}

#[async_trait]
impl CreateBook for CreateBookUseCase {
    #[instrument(skip_all, fields(title = %request.title))]
    async fn execute(&self, request: BookRequest) -> BookshelfResult<BookCreation> {
        if let Err(e) = validator::validate_book_request(&request) {
            debug!(error = %e, "Book request rejected");
            return Err(e.into());
        }

        let existing = self
            .find_book_by_title_repository
            .find(&request.title)
            .await?;

        if let Some(id) = existing.filter(|id| !id.is_empty()) {
            info!(book_id = %id, "Book already exists, skipping write");
            return Ok(BookCreation::AlreadyExists);
        }

        self.add_book_repository.add(&request).await?;

        info!("Book created");
        Ok(BookCreation::Created)
    }
}

// -------------------------------------------------------------------------
// Builder
// -------------------------------------------------------------------------

/// Runtime wiring for [`CreateBookUseCase`].
///
/// A missing collaborator is reported once, at `build()`, rather than on
/// every request.
#[derive(Default)]
pub struct CreateBookUseCaseBuilder {
    find_book_by_title_repository: Option<Arc<dyn FindBookByTitleRepository>>,
    add_book_repository: Option<Arc<dyn AddBookRepository>>,
}

impl CreateBookUseCaseBuilder {
    pub fn find_book_by_title_repository(
        mut self,
        repository: Arc<dyn FindBookByTitleRepository>,
    ) -> Self {
        self.find_book_by_title_repository = Some(repository);
        self
    }

    pub fn add_book_repository(mut self, repository: Arc<dyn AddBookRepository>) -> Self {
        self.add_book_repository = Some(repository);
        self
    }

    /// Finish wiring. The lookup repository is checked before the writer.
    pub fn build(self) -> BookshelfResult<CreateBookUseCase> {
        let find_book_by_title_repository =
            self.find_book_by_title_repository
                .ok_or(ApplicationError::MissingDependency {
                    name: "findBookByTitleRepository",
                })?;

        let add_book_repository =
            self.add_book_repository
                .ok_or(ApplicationError::MissingDependency {
                    name: "addBookRepository",
                })?;

        Ok(CreateBookUseCase::new(
            find_book_by_title_repository,
            add_book_repository,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockAddBookRepository, MockFindBookByTitleRepository};
    use crate::domain::{BookId, DomainError};
    use crate::error::BookshelfError;
    use mockall::predicate::eq;

    fn dune() -> BookRequest {
        BookRequest::new("Dune", "Ace", "url", ["Herbert"])
    }

    fn use_case(
        find: MockFindBookByTitleRepository,
        add: MockAddBookRepository,
    ) -> CreateBookUseCase {
        CreateBookUseCase::new(Arc::new(find), Arc::new(add))
    }

    fn untouched() -> (MockFindBookByTitleRepository, MockAddBookRepository) {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find().never();
        let mut add = MockAddBookRepository::new();
        add.expect_add().never();
        (find, add)
    }

    #[tokio::test]
    async fn rejects_each_missing_field_without_calling_collaborators() {
        let cases = [
            (BookRequest { title: String::new(), ..dune() }, "title"),
            (BookRequest { publisher: String::new(), ..dune() }, "publisher"),
            (BookRequest { photo: String::new(), ..dune() }, "photo"),
            (BookRequest { authors: vec![], ..dune() }, "authors"),
        ];

        for (request, field) in cases {
            let (find, add) = untouched();
            let err = use_case(find, add).execute(request).await.unwrap_err();
            assert_eq!(err, BookshelfError::Domain(DomainError::missing_param(field)));
        }
    }

    #[tokio::test]
    async fn creates_book_when_title_is_free() {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find()
            .with(eq("Dune"))
            .times(1)
            .returning(|_| Ok(None));

        let mut add = MockAddBookRepository::new();
        add.expect_add()
            .withf(|book| {
                book.title == "Dune"
                    && book.publisher == "Ace"
                    && book.photo == "url"
                    && book.authors == ["Herbert"]
            })
            .times(1)
            .returning(|_| Ok(()));

        let outcome = use_case(find, add).execute(dune()).await.unwrap();
        assert_eq!(outcome, BookCreation::Created);
        assert!(outcome.created());
    }

    #[tokio::test]
    async fn skips_write_when_title_exists() {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find()
            .times(1)
            .returning(|_| Ok(Some(BookId::new("book-1"))));
        let mut add = MockAddBookRepository::new();
        add.expect_add().never();

        let outcome = use_case(find, add).execute(dune()).await.unwrap();
        assert_eq!(outcome, BookCreation::AlreadyExists);
        assert!(!outcome.created());
    }

    #[tokio::test]
    async fn empty_id_counts_as_not_found() {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find().returning(|_| Ok(Some(BookId::new(""))));
        let mut add = MockAddBookRepository::new();
        add.expect_add().times(1).returning(|_| Ok(()));

        let outcome = use_case(find, add).execute(dune()).await.unwrap();
        assert_eq!(outcome, BookCreation::Created);
    }

    #[tokio::test]
    async fn lookup_error_propagates_and_stops_the_flow() {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find()
            .returning(|_| Err(ApplicationError::dependency("findBookByTitleRepository").into()));
        let mut add = MockAddBookRepository::new();
        add.expect_add().never();

        let err = use_case(find, add).execute(dune()).await.unwrap_err();
        assert_eq!(
            err,
            BookshelfError::Application(ApplicationError::dependency("findBookByTitleRepository"))
        );
    }

    #[tokio::test]
    async fn writer_error_propagates_unmodified() {
        let mut find = MockFindBookByTitleRepository::new();
        find.expect_find().returning(|_| Ok(None));
        let mut add = MockAddBookRepository::new();
        add.expect_add()
            .returning(|_| Err(BookshelfError::internal("disk full")));

        let err = use_case(find, add).execute(dune()).await.unwrap_err();
        assert_eq!(err, BookshelfError::internal("disk full"));
    }

    #[test]
    fn builder_requires_lookup_repository_first() {
        let err = CreateBookUseCase::builder().build().err().unwrap();
        assert_eq!(err.to_string(), "Missing param: findBookByTitleRepository");
    }

    #[test]
    fn builder_requires_add_repository() {
        let (find, _) = untouched();
        let err = CreateBookUseCase::builder()
            .find_book_by_title_repository(Arc::new(find))
            .build()
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Missing param: addBookRepository");
    }

    #[test]
    fn builder_with_both_repositories_succeeds() {
        let (find, add) = untouched();
        let built = CreateBookUseCase::builder()
            .find_book_by_title_repository(Arc::new(find))
            .add_book_repository(Arc::new(add))
            .build();
        assert!(built.is_ok());
    }
}
