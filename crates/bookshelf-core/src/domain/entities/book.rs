//! The `BookRequest` input and the persisted `BookRecord`.
//!
//! A `BookRequest` is not validated on construction: the create-book use case
//! and the router both need to report *which* field is missing, so
//! validation is an explicit step (`validate`) rather than a builder
//! invariant.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{BookField, BookId},
};

// ── BookRequest ──────────────────────────────────────────────────────────────

/// Input for creating a book.
///
/// All four fields are required. A string field is missing when empty; the
/// author list is missing when it has no entries. Fields absent from a
/// serialized request deserialize as empty, i.e. missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub publisher: String,
    pub photo: String,
    pub authors: Vec<String>,
}

impl BookRequest {
    pub fn new(
        title: impl Into<String>,
        publisher: impl Into<String>,
        photo: impl Into<String>,
        authors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            publisher: publisher.into(),
            photo: photo.into(),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `field` carries a value.
    pub fn has(&self, field: BookField) -> bool {
        match field {
            BookField::Title => !self.title.is_empty(),
            BookField::Publisher => !self.publisher.is_empty(),
            BookField::Photo => !self.photo.is_empty(),
            BookField::Authors => !self.authors.is_empty(),
        }
    }

    /// First missing field in validation order, if any.
    pub fn first_missing(&self) -> Option<BookField> {
        BookField::ORDER.into_iter().find(|field| !self.has(*field))
    }

    /// Fail-fast presence check: title, publisher, photo, authors.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.first_missing() {
            Some(field) => Err(DomainError::missing_param(field.as_str())),
            None => Ok(()),
        }
    }
}

impl fmt::Display for BookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' ({}) by {}",
            self.title,
            self.publisher,
            self.authors.join(", ")
        )
    }
}

// ── BookRecord ───────────────────────────────────────────────────────────────

/// A stored book. The id is assigned by whichever adapter persisted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub publisher: String,
    pub photo: String,
    pub authors: Vec<String>,
    pub added_at: DateTime<Utc>,
}

impl BookRecord {
    pub fn from_request(id: BookId, request: &BookRequest, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: request.title.clone(),
            publisher: request.publisher.clone(),
            photo: request.photo.clone(),
            authors: request.authors.clone(),
            added_at,
        }
    }
}
