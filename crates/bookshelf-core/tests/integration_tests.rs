//! Integration tests for bookshelf-core: router and use case wired together
//! with hand-written spy repositories.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookshelf_core::{
    application::ApplicationError,
    prelude::*,
};

/// Lookup spy: answers from a fixed list of existing titles and records
/// every title it was asked about.
#[derive(Default)]
struct FindBookByTitleRepositorySpy {
    existing: Vec<String>,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FindBookByTitleRepositorySpy {
    fn with_existing(titles: &[&str]) -> Self {
        Self {
            existing: titles.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FindBookByTitleRepository for FindBookByTitleRepositorySpy {
    async fn find(&self, title: &str) -> BookshelfResult<Option<BookId>> {
        self.calls.lock().unwrap().push(title.to_string());
        if self.fail {
            return Err(ApplicationError::dependency("findBookByTitleRepository").into());
        }
        Ok(self
            .existing
            .iter()
            .position(|t| t == title)
            .map(|index| BookId::new(format!("book-{index}"))))
    }
}

/// Writer spy: records every book it was asked to add.
#[derive(Default)]
struct AddBookRepositorySpy {
    fail: bool,
    added: Mutex<Vec<BookRequest>>,
}

impl AddBookRepositorySpy {
    fn added(&self) -> Vec<BookRequest> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddBookRepository for AddBookRepositorySpy {
    async fn add(&self, book: &BookRequest) -> BookshelfResult<()> {
        if self.fail {
            return Err(ApplicationError::dependency("addBookRepository").into());
        }
        self.added.lock().unwrap().push(book.clone());
        Ok(())
    }
}

struct Sut {
    router: BookCreationRouter,
    find: Arc<FindBookByTitleRepositorySpy>,
    add: Arc<AddBookRepositorySpy>,
}

fn make_sut(find: FindBookByTitleRepositorySpy, add: AddBookRepositorySpy) -> Sut {
    let find = Arc::new(find);
    let add = Arc::new(add);
    let use_case = CreateBookUseCase::new(find.clone(), add.clone());
    Sut {
        router: BookCreationRouter::new(Arc::new(use_case)),
        find,
        add,
    }
}

fn dune() -> BookRequestBody {
    BookRequestBody {
        title: Some("Dune".into()),
        publisher: Some("Ace".into()),
        photo: Some("url".into()),
        authors: Some(vec!["Herbert".into()]),
    }
}

#[tokio::test]
async fn new_title_is_written_once_and_returns_200() {
    let sut = make_sut(FindBookByTitleRepositorySpy::default(), AddBookRepositorySpy::default());

    let response = sut.router.route(Some(HttpRequest::new(dune()))).await;

    assert_eq!(response.status_code(), HttpStatus::Ok);
    assert!(response.body().is_none());
    assert_eq!(sut.find.calls(), vec!["Dune".to_string()]);
    assert_eq!(
        sut.add.added(),
        vec![BookRequest::new("Dune", "Ace", "url", ["Herbert"])]
    );
}

#[tokio::test]
async fn duplicate_title_is_idempotent_409() {
    let sut = make_sut(
        FindBookByTitleRepositorySpy::with_existing(&["Dune"]),
        AddBookRepositorySpy::default(),
    );

    for _ in 0..2 {
        let response = sut.router.route(Some(HttpRequest::new(dune()))).await;
        assert_eq!(response.status_code(), HttpStatus::Conflict);
        assert_eq!(
            response.body().map(|b| b.message.as_str()),
            Some("Resource already exists. Type: book; Name: Dune")
        );
    }

    assert_eq!(sut.find.calls().len(), 2);
    assert!(sut.add.added().is_empty());
}

#[tokio::test]
async fn missing_field_never_reaches_collaborators() {
    let sut = make_sut(FindBookByTitleRepositorySpy::default(), AddBookRepositorySpy::default());

    let response = sut
        .router
        .route(Some(HttpRequest::new(BookRequestBody {
            photo: None,
            ..dune()
        })))
        .await;

    assert_eq!(response.status_code(), HttpStatus::BadRequest);
    assert_eq!(response.body().unwrap().message, "Missing param: photo");
    assert!(sut.find.calls().is_empty());
    assert!(sut.add.added().is_empty());
}

#[tokio::test]
async fn lookup_failure_returns_500_and_skips_writer() {
    let sut = make_sut(FindBookByTitleRepositorySpy::failing(), AddBookRepositorySpy::default());

    let response = sut.router.route(Some(HttpRequest::new(dune()))).await;

    assert_eq!(response, HttpResponse::server_error());
    assert!(sut.add.added().is_empty());
}

#[tokio::test]
async fn writer_failure_returns_500_without_leaking_detail() {
    let sut = make_sut(
        FindBookByTitleRepositorySpy::default(),
        AddBookRepositorySpy {
            fail: true,
            ..Default::default()
        },
    );

    let response = sut.router.route(Some(HttpRequest::new(dune()))).await;

    assert_eq!(response.status_code(), HttpStatus::ServerError);
    assert_eq!(response.body().unwrap().name, "ServerError");
}

#[tokio::test]
async fn use_case_reports_dependency_error_unchanged() {
    let use_case = CreateBookUseCase::new(
        Arc::new(FindBookByTitleRepositorySpy::default()),
        Arc::new(AddBookRepositorySpy {
            fail: true,
            ..Default::default()
        }),
    );

    let err = use_case
        .execute(BookRequest::new("Dune", "Ace", "url", ["Herbert"]))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The following dependency exited with an error: addBookRepository"
    );
    assert_eq!(err.payload().name, "DepError");
}

#[tokio::test]
async fn builder_wired_use_case_behaves_like_constructor_wired() {
    let find = Arc::new(FindBookByTitleRepositorySpy::default());
    let add = Arc::new(AddBookRepositorySpy::default());
    let use_case = CreateBookUseCase::builder()
        .find_book_by_title_repository(find)
        .add_book_repository(add.clone())
        .build()
        .unwrap();

    let outcome = use_case
        .execute(BookRequest::new("Dune", "Ace", "url", ["Herbert"]))
        .await
        .unwrap();

    assert!(outcome.created());
    assert_eq!(add.added().len(), 1);
}
