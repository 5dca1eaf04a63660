//! Minimal error type for feeding groups in tests.

use thiserror::Error;

/// Error carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Failure(pub String);

/// Builds a [`Failure`] from any message.
///
/// # Examples
///
/// ```
/// use test_helpers::failure;
///
/// assert_eq!(failure("boom").to_string(), "boom");
/// ```
#[must_use]
pub fn failure(message: impl Into<String>) -> Failure {
    Failure(message.into())
}
