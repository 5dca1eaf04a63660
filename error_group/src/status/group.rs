//! Combined error and status aggregator.

use std::{fmt, sync::Arc};

use tracing::{debug, trace};

use super::{BaselinePolicy, DEFAULT_STATUS_BASELINE, Status, StatusRange, StatusTally};
use crate::{
    accumulator::Accumulator,
    config::GroupConfig,
    error::{BoxError, CombinedError, GroupResult, Sequence, SharedError, require},
    render,
};

/// Collects errors and status codes reported by concurrently running tasks.
///
/// Errors and statuses live in two sequences with independent locks. Tasks
/// usually contribute one of each, but the sequences are not index-aligned:
/// a task may add a status without an error, and a concurrent reader can
/// observe a status whose paired error has not been stored yet. Single
/// sequence operations are atomic; operations touching both sequences
/// ([`Self::add_status_and_error`], [`Self::all`],
/// [`Self::to_status_and_error`]) are not atomic as a whole.
///
/// The status sequence tracks a [`StatusRange`]. Until the first status is
/// recorded the range reports the baseline (200 unless configured otherwise);
/// see [`BaselinePolicy`] for how the baseline interacts with later
/// statuses.
///
/// # Examples
///
/// ```
/// use error_group::ErrorStatusGroup;
///
/// let group = ErrorStatusGroup::new();
/// group.add_status(200);
/// group.add_status_and_error(503, "upstream unavailable");
///
/// let (status, err) = group.to_status_and_error();
/// assert_eq!(status, 503);
/// assert_eq!(
///     err.expect("one error was recorded").to_string(),
///     "lowest status: [200]\nhighest status: [503]\nupstream unavailable"
/// );
/// ```
#[derive(Debug)]
pub struct ErrorStatusGroup {
    errors: Accumulator<SharedError>,
    statuses: Accumulator<Status, StatusTally>,
}

impl Default for ErrorStatusGroup {
    fn default() -> Self {
        Self::with_baseline(DEFAULT_STATUS_BASELINE)
    }
}

impl ErrorStatusGroup {
    /// Create an empty group with the default baseline of 200.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group reporting `baseline` until a status arrives.
    #[must_use]
    pub fn with_baseline(baseline: Status) -> Self {
        Self::with_baseline_policy(baseline, BaselinePolicy::default())
    }

    /// Create an empty group with an explicit baseline policy.
    #[must_use]
    pub fn with_baseline_policy(baseline: Status, policy: BaselinePolicy) -> Self {
        Self {
            errors: Accumulator::with_tally(()),
            statuses: Accumulator::with_tally(StatusTally::new(baseline, policy)),
        }
    }

    /// Create an empty group from loaded configuration.
    #[must_use]
    pub fn with_config(config: &GroupConfig) -> Self {
        Self::with_baseline_policy(config.status_baseline, config.baseline_policy)
    }

    /// Record `err` in the error sequence.
    pub fn add_error<E>(&self, err: E)
    where
        E: Into<BoxError>,
    {
        self.add_shared_error(Arc::from(err.into()));
    }

    /// Record an already shared error in the error sequence.
    pub fn add_shared_error(&self, err: SharedError) {
        let len = self.errors.push(err);
        trace!(len, "recorded error");
    }

    /// Record `err` when present; `None` is ignored.
    pub fn add_optional_error<E>(&self, err: Option<E>)
    where
        E: Into<BoxError>,
    {
        if let Some(inner) = err {
            self.add_error(inner);
        }
    }

    /// Record the error side of a task's result and hand back its value.
    pub fn record_error<T, E>(&self, result: Result<T, E>) -> Option<T>
    where
        E: Into<BoxError>,
    {
        result.map_err(|err| self.add_error(err)).ok()
    }

    /// Record `status` and fold it into the running range.
    pub fn add_status(&self, status: Status) {
        let len = self.statuses.push(status);
        trace!(status, len, "recorded status");
    }

    /// Record a status together with its error.
    ///
    /// Both values are stored before this returns, but under separate locks:
    /// a concurrent reader may see the status before the error.
    pub fn add_status_and_error<E>(&self, status: Status, err: E)
    where
        E: Into<BoxError>,
    {
        self.add_status(status);
        self.add_error(err);
    }

    /// Record a status together with an error that may be absent.
    pub fn add_status_and_optional_error<E>(&self, status: Status, err: Option<E>)
    where
        E: Into<BoxError>,
    {
        self.add_status(status);
        self.add_optional_error(err);
    }

    /// Copies of the status and error sequences.
    ///
    /// Each copy is atomic on its own; the pair is not taken under one lock.
    #[must_use]
    pub fn all(&self) -> (Vec<Status>, Vec<SharedError>) {
        let statuses = self.statuses.snapshot();
        let errors = self.errors.snapshot();
        (statuses, errors)
    }

    /// Earliest stored error.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) naming
    /// [`Sequence::Errors`] when no error has been recorded.
    pub fn first_error(&self) -> GroupResult<SharedError> {
        require(self.errors.first(), Sequence::Errors)
    }

    /// Most recently stored error.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) naming
    /// [`Sequence::Errors`] when no error has been recorded.
    pub fn last_error(&self) -> GroupResult<SharedError> {
        require(self.errors.last(), Sequence::Errors)
    }

    /// Earliest stored status.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) naming
    /// [`Sequence::Statuses`] when no status has been recorded.
    pub fn first_status(&self) -> GroupResult<Status> {
        require(self.statuses.first(), Sequence::Statuses)
    }

    /// Most recently stored status.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`](crate::GroupError::Empty) naming
    /// [`Sequence::Statuses`] when no status has been recorded.
    pub fn last_status(&self) -> GroupResult<Status> {
        require(self.statuses.last(), Sequence::Statuses)
    }

    /// Highest status recorded, or the baseline before any status.
    #[must_use]
    pub fn highest_status(&self) -> Status {
        self.status_range().highest()
    }

    /// Lowest status recorded, or the baseline before any status.
    #[must_use]
    pub fn lowest_status(&self) -> Status {
        self.status_range().lowest()
    }

    /// Both extrema, read atomically.
    #[must_use]
    pub fn status_range(&self) -> StatusRange {
        self.statuses.tally().range()
    }

    /// Number of stored errors.
    #[must_use]
    pub fn len_errors(&self) -> usize {
        self.errors.len()
    }

    /// Number of stored statuses.
    #[must_use]
    pub fn len_statuses(&self) -> usize {
        self.statuses.len()
    }

    /// Returns `true` when neither sequence holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.statuses.is_empty()
    }

    /// Status header followed by every stored message; empty when no error
    /// has been recorded, whatever the statuses.
    #[must_use]
    pub fn message(&self) -> String {
        self.reduce(|message, _, _| message)
    }

    /// Reduce the group into one error carrying the status range.
    ///
    /// Returns `None` when no error was recorded.
    #[must_use]
    pub fn to_error(&self) -> Option<CombinedError> {
        self.reduce(|message, entries, range| {
            if entries.is_empty() {
                return None;
            }
            debug!(
                count = entries.len(),
                lowest = range.lowest(),
                highest = range.highest(),
                "reduced error status group"
            );
            Some(CombinedError::new(message, entries.to_vec(), Some(range)))
        })
    }

    /// Highest status together with the combined error.
    ///
    /// Intended for the end of a fan-in, once every task has reported. The
    /// status is read before the reduction, so a concurrent writer can make
    /// the two disagree.
    #[must_use]
    pub fn to_status_and_error(&self) -> (Status, Option<CombinedError>) {
        let highest = self.highest_status();
        (highest, self.to_error())
    }

    /// `Ok(highest)` when no error was recorded, otherwise the combined error.
    ///
    /// # Errors
    ///
    /// Returns the [`CombinedError`] produced by [`Self::to_error`].
    pub fn to_result(&self) -> Result<Status, CombinedError> {
        match self.to_status_and_error() {
            (_, Some(err)) => Err(err),
            (status, None) => Ok(status),
        }
    }

    // Lock order is errors, then statuses. Nothing else holds both.
    fn reduce<F, U>(&self, f: F) -> U
    where
        F: FnOnce(String, &[SharedError], StatusRange) -> U,
    {
        self.errors.with(|entries, ()| {
            let range = self.statuses.tally().range();
            f(render::status_report(range, entries), entries, range)
        })
    }
}

impl fmt::Display for ErrorStatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
