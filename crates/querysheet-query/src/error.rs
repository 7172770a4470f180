//! Failure conditions for query and sequence operations.

use thiserror::Error;

/// Errors raised by retrieval, aggregation and insertion helpers.
///
/// Each variant corresponds to one documented failure of a sequence
/// primitive; nothing here is recoverable inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The sequence is empty and the operation needs at least one element.
    #[error("sequence contains no elements")]
    NoElements,

    /// No element satisfies the predicate.
    #[error("sequence contains no matching element")]
    NoMatch,

    /// A unique element was requested but the sequence holds several.
    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    /// A unique match was requested but several elements satisfy the predicate.
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,

    /// Positional access outside `0..len` (or `0..=len` for insertion).
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An integer sum left the range of its type.
    #[error("arithmetic operation resulted in an overflow")]
    Overflow,

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(String),
}

impl From<regex::Error> for QueryError {
    fn from(err: regex::Error) -> Self {
        QueryError::InvalidRegex(err.to_string())
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
