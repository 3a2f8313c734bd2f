//! Transport-level request and response shapes.
//!
//! These are plain values: no server, no sockets. A transport adapter
//! deserializes into [`HttpRequest`] and serializes [`HttpResponse`] back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{BookRequest, DomainError, ErrorPayload};

// ── Request ──────────────────────────────────────────────────────────────────

/// Body of a create-book request as it arrives on the wire.
///
/// Every field is optional here; presence is decided by the router, not by
/// the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookRequestBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
}

impl From<BookRequestBody> for BookRequest {
    /// Absent fields become empty values, which the domain treats as missing.
    fn from(body: BookRequestBody) -> Self {
        Self {
            title: body.title.unwrap_or_default(),
            publisher: body.publisher.unwrap_or_default(),
            photo: body.photo.unwrap_or_default(),
            authors: body.authors.unwrap_or_default(),
        }
    }
}

impl From<BookRequest> for BookRequestBody {
    fn from(request: BookRequest) -> Self {
        Self {
            title: Some(request.title),
            publisher: Some(request.publisher),
            photo: Some(request.photo),
            authors: Some(request.authors),
        }
    }
}

/// An incoming request. The body may be missing entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<BookRequestBody>,
}

impl HttpRequest {
    pub fn new(body: BookRequestBody) -> Self {
        Self { body: Some(body) }
    }

    pub fn without_body() -> Self {
        Self { body: None }
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

/// The only status codes the router ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum HttpStatus {
    Ok,
    BadRequest,
    Conflict,
    ServerError,
}

impl HttpStatus {
    pub const fn as_u16(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Conflict => 409,
            Self::ServerError => 500,
        }
    }

    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::Conflict => "Conflict",
            Self::ServerError => "Internal Server Error",
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.as_u16()
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Self::Ok),
            400 => Ok(Self::BadRequest),
            409 => Ok(Self::Conflict),
            500 => Ok(Self::ServerError),
            other => Err(format!("unsupported status code: {other}")),
        }
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// Response produced once per request and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    status_code: HttpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<ErrorPayload>,
}

impl HttpResponse {
    /// 200 with an empty body.
    pub fn ok() -> Self {
        Self {
            status_code: HttpStatus::Ok,
            body: None,
        }
    }

    /// 400 naming the missing parameter.
    pub fn bad_request(param_name: impl Into<String>) -> Self {
        Self {
            status_code: HttpStatus::BadRequest,
            body: Some(DomainError::missing_param(param_name).payload()),
        }
    }

    /// 409 naming the conflicting resource.
    pub fn resource_conflict(resource_type: &str, resource_name: &str) -> Self {
        Self {
            status_code: HttpStatus::Conflict,
            body: Some(DomainError::resource_conflict(resource_type, resource_name).payload()),
        }
    }

    /// 500 with the generic server error body.
    pub fn server_error() -> Self {
        Self {
            status_code: HttpStatus::ServerError,
            body: Some(ErrorPayload::server_error()),
        }
    }

    pub fn status_code(&self) -> HttpStatus {
        self.status_code
    }

    pub fn body(&self) -> Option<&ErrorPayload> {
        self.body.as_ref()
    }
}
