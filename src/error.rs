//! Error types for the suratfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for suratfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring or rendering a letter.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page canvas violated its measurement contract.
    ///
    /// Raised when a canvas reports a negative or non-finite value for a
    /// page dimension or a text measurement. The render call is aborted.
    #[error("Canvas contract violation: {0}")]
    Canvas(String),

    /// Error while laying out content onto pages.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The input document tree is not usable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
