//! Error types for the content-loader crate.

use crate::types::ContentId;
use thiserror::Error;

/// Errors that can occur while loading and indexing the content fixture
#[derive(Error, Debug)]
pub enum ContentLoadError {
    /// Fixture file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the fixture
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The fixture is not a valid JSON content list
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A field had a value that cannot be interpreted
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two items share the same identifier
    #[error("Duplicate content id: {id}")]
    DuplicateId { id: ContentId },

    /// Collection-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ContentLoadError>;
