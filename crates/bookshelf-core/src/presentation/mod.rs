//! Presentation layer: the router and its transport-level types.

pub mod book_creation_router;
pub mod http;

pub use book_creation_router::BookCreationRouter;
pub use http::{BookRequestBody, HttpRequest, HttpResponse, HttpStatus};
