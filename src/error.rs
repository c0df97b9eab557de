//! Error types for combinatorial generation.
//!
//! Every fallible operation in this crate reports a [`CombinatoricsError`].
//! Failures are always usage errors raised synchronously at the offending
//! call; nothing here is transient or worth retrying.

use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, CombinatoricsError>;

/// Represents errors that can occur while building or traversing a
/// meta-collection.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::Combinations;
/// use lexicomb::{CombinatoricsError, GenerateOption};
///
/// let error = Combinations::with_option(vec![1, 2], 3, GenerateOption::WithoutRepetition)
///     .unwrap_err();
/// assert!(matches!(error, CombinatoricsError::InvalidArgument { .. }));
/// assert_eq!(
///     error.to_string(),
///     "invalid argument `lower_index`: 3 exceeds the 2 available values"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatoricsError {
    /// An argument supplied to a constructor or helper is outside its domain.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The enumerator is not positioned on a result.
    #[error("invalid operation `{operation}`: {reason}")]
    InvalidOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state that made the operation invalid.
        reason: &'static str,
    },

    /// The requested operation is not supported by this collection or enumerator.
    #[error("unsupported operation `{operation}`: {reason}")]
    UnsupportedOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Why the operation is not supported.
        reason: &'static str,
    },
}

impl CombinatoricsError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) const fn invalid_operation(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidOperation { operation, reason }
    }

    pub(crate) const fn unsupported_operation(
        operation: &'static str,
        reason: &'static str,
    ) -> Self {
        Self::UnsupportedOperation { operation, reason }
    }

    /// Error returned by `reset` on every enumerator in this crate.
    pub(crate) const fn reset_unsupported() -> Self {
        Self::unsupported_operation(
            "reset",
            "enumerators cannot be restarted; request a new one from the collection",
        )
    }

    /// Error returned by `current` when the enumerator has not been advanced yet.
    pub(crate) const fn before_first() -> Self {
        Self::invalid_operation("current", "move_next has not been called yet")
    }

    /// Error returned by `current` once the enumerator has run past the last result.
    pub(crate) const fn after_last() -> Self {
        Self::invalid_operation("current", "the enumerator is exhausted")
    }
}
