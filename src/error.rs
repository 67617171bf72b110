//! Error types for the Topica library.
//!
//! All library errors are represented by the [`TopicaError`] enum. Input-shape
//! problems are split into distinct variants (wrong type vs. missing field)
//! so callers can branch on them, and collaborator failures such as fetch
//! errors are propagated unchanged.
//!
//! # Examples
//!
//! ```
//! use topica::error::{Result, TopicaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TopicaError::missing_field("content"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

use crate::fetch::FetchError;

/// The main error type for Topica operations.
#[derive(Error, Debug)]
pub enum TopicaError {
    /// I/O errors (reading document files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document has the wrong shape entirely (not a mapping)
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// The input document is a mapping but lacks a required field
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Malformed chunk grammar pattern, rejected at construction time
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Analysis-related errors (tagging, chunking, segmentation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Page fetch failures, propagated unchanged from the fetcher
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

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

/// Result type alias for operations that may fail with TopicaError.
pub type Result<T> = std::result::Result<T, TopicaError>;

impl TopicaError {
    /// Create a new wrong-type error.
    pub fn invalid_type<S: Into<String>>(msg: S) -> Self {
        TopicaError::InvalidType(msg.into())
    }

    /// Create a new missing-field error.
    pub fn missing_field<S: Into<String>>(msg: S) -> Self {
        TopicaError::MissingField(msg.into())
    }

    /// Create a new grammar error.
    pub fn grammar<S: Into<String>>(msg: S) -> Self {
        TopicaError::Grammar(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TopicaError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TopicaError::Other(msg.into())
    }
}
