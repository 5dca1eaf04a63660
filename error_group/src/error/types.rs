//! Primary error enum for aggregator queries and configuration.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

/// Names one of the ordered sequences held by a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
    /// The stored error entries.
    Errors,
    /// The stored status codes.
    Statuses,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Errors => "errors",
            Self::Statuses => "statuses",
        })
    }
}

/// Errors reported by group queries and configuration loading.
///
/// Recording values never fails; only reads of an empty sequence and
/// configuration extraction can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupError {
    /// A first/last accessor was called before anything was recorded.
    #[error("cannot read from empty {sequence} sequence")]
    Empty {
        /// Sequence that had no entries.
        sequence: Sequence,
    },

    /// Group configuration could not be extracted from its providers.
    #[error("Failed to load group configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}

impl GroupError {
    /// Construct an [`GroupError::Empty`] for `sequence`.
    #[must_use]
    pub const fn empty(sequence: Sequence) -> Self {
        Self::Empty { sequence }
    }

    /// Returns `true` when this error reports an empty sequence.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

impl From<FigmentError> for GroupError {
    fn from(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }
}

/// Result alias used by fallible group operations.
pub type GroupResult<T> = Result<T, GroupError>;

/// Map an absent first/last value to [`GroupError::Empty`].
pub(crate) fn require<T>(value: Option<T>, sequence: Sequence) -> GroupResult<T> {
    value.ok_or_else(|| {
        tracing::debug!(%sequence, "accessor called on an empty sequence");
        GroupError::empty(sequence)
    })
}
