//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live separately in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a record's phone list or rebuilding
/// a record from exported view data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone is already present on the record
    #[error("phone {0} is already in record")]
    DuplicatePhone(String),

    /// No matching phone on the record
    #[error("phone {0} not found in record")]
    PhoneNotFound(String),

    /// A field in exported view data failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when querying an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record under the given name
    #[error("no record for contact: {0}")]
    NotFound(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
