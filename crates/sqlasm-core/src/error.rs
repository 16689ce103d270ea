//! Error types for statement assembly.

use thiserror::Error;

/// Errors raised when a statement cannot be assembled.
///
/// Every variant is a precondition violation detected before any SQL text
/// is handed back, so a caller never receives a statement whose placeholders
/// disagree with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The table name is empty.
    #[error("table name must not be empty")]
    EmptyTable,

    /// A parameter map contains an empty column name.
    #[error("column name must not be empty")]
    EmptyColumn,

    /// INSERT or UPDATE was given no columns.
    #[error("{statement} requires at least one column")]
    NoAssignments {
        /// Statement kind (`INSERT` or `UPDATE`).
        statement: &'static str,
    },

    /// The same column appears twice in a parameter map.
    #[error("column '{0}' is assigned more than once")]
    DuplicateColumn(String),

    /// A WHERE predicate or raw expression has no SQL text.
    #[error("SQL fragment must not be empty")]
    EmptyFragment,

    /// A fragment's `?` count differs from the arguments supplied with it.
    #[error("fragment '{fragment}' has {placeholders} placeholder(s) but {args} argument(s)")]
    PlaceholderMismatch {
        /// The offending fragment, as written by the caller.
        fragment: String,
        /// Number of `?` placeholders found in the fragment.
        placeholders: usize,
        /// Number of arguments supplied with the fragment.
        args: usize,
    },

    /// Predicates were added to a statement kind that has no WHERE clause.
    #[error("{statement} does not accept WHERE predicates")]
    WhereNotSupported {
        /// Statement kind.
        statement: &'static str,
    },

    /// A force-index hint was requested on a dialect without index hints.
    #[error("dialect '{dialect}' does not support index hints")]
    IndexHintUnsupported {
        /// Dialect name.
        dialect: &'static str,
    },
}

/// Result type alias for statement assembly.
pub type Result<T> = std::result::Result<T, BuildError>;
