//! Centralized error types for the board.

use thiserror::Error;

/// Text of the blocking alert shown when a submitted form fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

/// Main error type for board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    #[error("Container for '{0}' is not in the document")]
    MissingContainer(&'static str),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

impl From<askama::Error> for BoardError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e.to_string())
    }
}
