//! Domain value objects: BookId, BookField, ErrorPayload.
//!
//! Pure value types with equality-by-value and no identity of their own.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── BookId ───────────────────────────────────────────────────────────────────

/// Opaque identifier assigned to a book by the persistence collaborator.
///
/// The core never generates or interprets ids; it only checks whether a
/// lookup returned one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id counts as "no book found".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// ── BookField ────────────────────────────────────────────────────────────────

/// The required fields of a book request, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Publisher,
    Photo,
    Authors,
}

impl BookField {
    /// Validation order. The first missing field wins.
    pub const ORDER: [BookField; 4] = [Self::Title, Self::Publisher, Self::Photo, Self::Authors];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Publisher => "publisher",
            Self::Photo => "photo",
            Self::Authors => "authors",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ErrorPayload ─────────────────────────────────────────────────────────────

/// Serializable error body: `{"name": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub name: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Generic server error. Carries no detail about the underlying failure.
    pub fn server_error() -> Self {
        Self::new("ServerError", "Internal error")
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
