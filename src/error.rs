//! Error types for the typeahead library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TypeaheadError`] enum. Absence and emptiness are ordinary return values
//! in this crate (an unknown prefix yields an empty result, an unknown word
//! yields `None`); errors are reserved for I/O failures and configuration
//! misuse.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for typeahead operations.
#[derive(Error, Debug)]
pub enum TypeaheadError {
    /// I/O errors (lexicon file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon construction errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Query-related errors (invalid parameters, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TypeaheadError.
pub type Result<T> = std::result::Result<T, TypeaheadError>;

impl TypeaheadError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TypeaheadError::Lexicon(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        TypeaheadError::Query(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TypeaheadError::Query(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TypeaheadError::Other(msg.into())
    }
}
