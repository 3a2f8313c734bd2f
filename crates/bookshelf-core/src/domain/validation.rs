use crate::domain::{entities::BookRequest, error::DomainError};

/// Centralized domain validation.
///
/// Delegates to [`BookRequest::validate`]; the router reads the same
/// field order through [`BookRequest::first_missing`].
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_book_request(request: &BookRequest) -> Result<(), DomainError> {
        request.validate()
    }
}
