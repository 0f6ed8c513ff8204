//! Error types for the collection crate.
//!
//! Every way an incoming collection document can be rejected maps to one
//! variant here, so callers can tell a missing file apart from a record
//! that simply lacks a field.

use thiserror::Error;

/// Errors that can occur while loading or validating a game collection
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Collection file could not be found
    #[error("Collection file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the collection
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON, or a field has the wrong JSON type
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level document was valid JSON but not an array of records
    #[error("Expected a JSON array of games, found {found}")]
    NotAnArray { found: String },

    /// A record is missing a field the selection logic depends on
    ///
    /// `record` is the game's name when it has one, otherwise its position
    /// in the document (e.g. `3` or `3.expansions.1`).
    #[error("Malformed record {record}: missing field `{field}`")]
    MalformedRecord { record: String, field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CollectionError>;
