//! Single error value produced by reducing a group.

use std::error::Error as StdError;

use thiserror::Error;

use super::SharedError;
use crate::status::{Status, StatusRange};

/// Every error held by a group at the moment it was reduced, rendered as one
/// message.
///
/// The rendered message is exactly what the group's `Display` produced at
/// that instant, so `combined.to_string() == group.to_string()` holds when no
/// writes race the reduction.
///
/// # Examples
///
/// ```
/// use error_group::ErrorGroup;
///
/// let group = ErrorGroup::new();
/// group.add("disk full");
/// group.add("socket closed");
/// let combined = group.to_error().expect("two errors were recorded");
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.to_string(), "disk full\nsocket closed");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CombinedError {
    message: String,
    entries: Vec<SharedError>,
    status: Option<StatusRange>,
}

impl CombinedError {
    pub(crate) const fn new(
        message: String,
        entries: Vec<SharedError>,
        status: Option<StatusRange>,
    ) -> Self {
        Self {
            message,
            entries,
            status,
        }
    }

    /// Rendered message, identical to the `Display` output.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Errors the message was rendered from, in stored order.
    #[must_use]
    pub fn entries(&self) -> &[SharedError] {
        &self.entries
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &(dyn StdError + Send + Sync + 'static)> {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Number of errors in the reduction.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Status extrema captured alongside the errors.
    ///
    /// Only reductions of an [`ErrorStatusGroup`](crate::ErrorStatusGroup)
    /// carry a range.
    #[must_use]
    pub const fn status_range(&self) -> Option<StatusRange> {
        self.status
    }

    /// Highest status captured alongside the errors, if any.
    #[must_use]
    pub fn highest_status(&self) -> Option<Status> {
        self.status.map(StatusRange::highest)
    }
}

impl<'a> IntoIterator for &'a CombinedError {
    type Item = &'a SharedError;
    type IntoIter = std::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for CombinedError {
    type Item = SharedError;
    type IntoIter = std::vec::IntoIter<SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
