//! Error types for query construction.

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building a query. None of them leaves a partially
/// rewritten document behind: the tree is discarded on failure.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The template (after id substitution) is not well-formed XML.
    #[error("malformed query template: {0}")]
    Malformed(String),

    /// A repeated value constraint targets an element whose group has no
    /// parent to receive the cloned group.
    #[error("cannot repeat constraint on <{element}>: its group has no enclosing element")]
    Unclonable { element: String },

    /// Writing the rewritten tree back to text failed.
    #[error("failed to serialize query: {0}")]
    Serialize(String),
}
