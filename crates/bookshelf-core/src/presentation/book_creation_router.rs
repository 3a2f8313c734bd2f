//! Book Creation Router - transport boundary for the create-book use case.
//!
//! Every request runs through four steps and stops at the first response:
//! 1. Guard: request, body and use case must all be present (else 500)
//! 2. Validate: title, publisher, photo, authors (else 400)
//! 3. Delegate to the use case
//! 4. Map: created → 200, duplicate → 409, any error → 500

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    application::{BookCreation, ports::CreateBook},
    domain::BookRequest,
    presentation::http::{HttpRequest, HttpResponse},
};

/// Resource type reported in conflict responses.
const RESOURCE_TYPE: &str = "book";

/// Translates create-book requests into use case calls.
#[derive(Clone)]
pub struct BookCreationRouter {
    create_book_use_case: Option<Arc<dyn CreateBook>>,
}

impl BookCreationRouter {
    pub fn new(create_book_use_case: Arc<dyn CreateBook>) -> Self {
        Self {
            create_book_use_case: Some(create_book_use_case),
        }
    }

    /// A router with no use case behind it. Every request gets a 500.
    pub fn unconfigured() -> Self {
        Self {
            create_book_use_case: None,
        }
    }

    /// Route one request. Never fails: every outcome is a response.
    #[instrument(skip_all)]
    pub async fn route(&self, request: Option<HttpRequest>) -> HttpResponse {
        let Some(use_case) = self.create_book_use_case.as_ref() else {
            error!("No create-book use case configured");
            return HttpResponse::server_error();
        };

        let Some(body) = request.and_then(|r| r.body) else {
            warn!("Request has no body");
            return HttpResponse::server_error();
        };

        let book = BookRequest::from(body);
        if let Some(field) = book.first_missing() {
            info!(field = %field, "Missing required field");
            return HttpResponse::bad_request(field.as_str());
        }

        let title = book.title.clone();
        match use_case.execute(book).await {
            Ok(BookCreation::Created) => HttpResponse::ok(),
            Ok(BookCreation::AlreadyExists) => {
                HttpResponse::resource_conflict(RESOURCE_TYPE, &title)
            }
            Err(e) => {
                error!(error = %e, category = ?e.category(), "Create book failed");
                HttpResponse::server_error()
            }
        }
    }
}
