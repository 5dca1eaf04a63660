//! Error-only aggregator.

use std::{fmt, sync::Arc};

use tracing::{debug, trace};

use crate::{
    accumulator::Accumulator,
    error::{BoxError, CombinedError, GroupResult, Sequence, SharedError, require},
    render,
};

/// Collects errors reported by concurrently running tasks.
///
/// Share one group between tasks (by reference inside
/// [`std::thread::scope`] or behind an [`Arc`]) and reduce it once the tasks
/// have finished. Entries are kept in the order the internal lock serialised
/// the `add*` calls, which is not necessarily the order the tasks started.
///
/// # Examples
///
/// ```
/// use error_group::ErrorGroup;
///
/// let group = ErrorGroup::new();
/// std::thread::scope(|scope| {
///     for shard in 0..3 {
///         let group = &group;
///         scope.spawn(move || {
///             if shard != 1 {
///                 group.add(format!("shard {shard} failed"));
///             }
///         });
///     }
/// });
/// assert_eq!(group.len(), 2);
/// assert!(group.to_error().is_some());
/// ```
#[derive(Debug, Default)]
pub struct ErrorGroup {
    entries: Accumulator<SharedError>,
}

impl ErrorGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err`.
    ///
    /// Accepts any error type as well as `String` and `&str` messages.
    pub fn add<E>(&self, err: E)
    where
        E: Into<BoxError>,
    {
        self.add_shared(Arc::from(err.into()));
    }

    /// Record an error that is already shared.
    pub fn add_shared(&self, err: SharedError) {
        let len = self.entries.push(err);
        trace!(len, "recorded error");
    }

    /// Record `err` when present; `None` is ignored.
    pub fn add_optional<E>(&self, err: Option<E>)
    where
        E: Into<BoxError>,
    {
        if let Some(inner) = err {
            self.add(inner);
        }
    }

    /// Record the error side of a task's result and hand back its value.
    ///
    /// ```
    /// use error_group::ErrorGroup;
    ///
    /// let group = ErrorGroup::new();
    /// let parsed: Vec<u8> = ["1", "x", "3"]
    ///     .into_iter()
    ///     .filter_map(|raw| group.record(raw.parse::<u8>()))
    ///     .collect();
    /// assert_eq!(parsed, vec![1, 3]);
    /// assert_eq!(group.len(), 1);
    /// ```
    pub fn record<T, E>(&self, result: Result<T, E>) -> Option<T>
    where
        E: Into<BoxError>,
    {
        result.map_err(|err| self.add(err)).ok()
    }

    /// Copy of every stored error, in stored order.
    ///
    /// The copy is taken atomically and later additions do not alter it.
    #[must_use]
    pub fn all(&self) -> Vec<SharedError> {
        self.entries.snapshot()
    }

    /// Earliest stored error.
    ///
    /// Under concurrent use this is whichever task reached the lock first.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) when nothing
    /// has been recorded.
    pub fn first(&self) -> GroupResult<SharedError> {
        require(self.entries.first(), Sequence::Errors)
    }

    /// Most recently stored error.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) when nothing
    /// has been recorded.
    pub fn last(&self) -> GroupResult<SharedError> {
        require(self.entries.last(), Sequence::Errors)
    }

    /// Number of stored errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no error has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every stored message joined with `\n`; empty when nothing was recorded.
    #[must_use]
    pub fn message(&self) -> String {
        self.entries.with(|entries, ()| render::join_messages(entries))
    }

    /// Reduce the group into one error.
    ///
    /// Returns `None` when nothing was recorded, never an error with an empty
    /// message.
    #[must_use]
    pub fn to_error(&self) -> Option<CombinedError> {
        let (message, entries) = self
            .entries
            .with(|entries, ()| (render::join_messages(entries), entries.to_vec()));
        if entries.is_empty() {
            return None;
        }
        debug!(count = entries.len(), "reduced error group");
        Some(CombinedError::new(message, entries, None))
    }

    /// `Ok(())` when nothing was recorded, otherwise the combined error.
    ///
    /// # Errors
    ///
    /// Returns the [`CombinedError`] produced by [`Self::to_error`].
    pub fn to_result(&self) -> Result<(), CombinedError> {
        self.to_error().map_or(Ok(()), Err)
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
