//! Ordered, internally synchronised value accumulator.
//!
//! Both groups are built from [`Accumulator`]: a `Vec` behind a single
//! [`parking_lot::Mutex`], together with a [`Tally`] that observes every value
//! while the lock is held. Keeping the tally under the same lock as the
//! values means a reader never sees a value without its contribution to the
//! tally, or the reverse.

use parking_lot::Mutex;

/// Running summary updated as values are appended.
pub trait Tally<T> {
    /// Fold `value` into the summary. Called with the accumulator lock held.
    fn observe(&mut self, value: &T);
}

impl<T> Tally<T> for () {
    fn observe(&mut self, _value: &T) {}
}

#[derive(Debug)]
struct Entries<T, R> {
    values: Vec<T>,
    tally: R,
}

/// Append-only sequence safe to share between threads.
///
/// Every operation holds the lock for its whole duration, so each call is
/// atomic with respect to every other call on the same accumulator.
///
/// # Examples
///
/// ```
/// use error_group::Accumulator;
///
/// let seen: Accumulator<u32> = Accumulator::new();
/// std::thread::scope(|scope| {
///     for n in 0..4 {
///         let seen = &seen;
///         scope.spawn(move || seen.push(n));
///     }
/// });
/// assert_eq!(seen.len(), 4);
/// ```
#[derive(Debug)]
pub struct Accumulator<T, R = ()> {
    inner: Mutex<Entries<T, R>>,
}

impl<T, R: Default> Default for Accumulator<T, R> {
    fn default() -> Self {
        Self::with_tally(R::default())
    }
}

impl<T> Accumulator<T> {
    /// Create an empty accumulator without a running summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, R> Accumulator<T, R> {
    /// Create an empty accumulator whose summary starts at `tally`.
    #[must_use]
    pub fn with_tally(tally: R) -> Self {
        Self {
            inner: Mutex::new(Entries {
                values: Vec::new(),
                tally,
            }),
        }
    }

    /// Append `value` and return the number of stored values afterwards.
    pub fn push(&self, value: T) -> usize
    where
        R: Tally<T>,
    {
        let mut entries = self.inner.lock();
        entries.tally.observe(&value);
        entries.values.push(value);
        entries.values.len()
    }

    /// Current number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().values.len()
    }

    /// Returns `true` when nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().values.is_empty()
    }

    /// Copy of every stored value, taken atomically.
    ///
    /// Later appends do not affect the returned vector.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().values.clone()
    }

    /// Earliest stored value.
    #[must_use]
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().values.first().cloned()
    }

    /// Most recently stored value.
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().values.last().cloned()
    }

    /// Current summary.
    #[must_use]
    pub fn tally(&self) -> R
    where
        R: Clone,
    {
        self.inner.lock().tally.clone()
    }

    /// Run `f` over the stored values and summary with the lock held.
    ///
    /// `f` must not call back into the same accumulator; the lock is not
    /// re-entrant.
    pub fn with<F, U>(&self, f: F) -> U
    where
        F: FnOnce(&[T], &R) -> U,
    {
        let entries = self.inner.lock();
        f(&entries.values, &entries.tally)
    }
}
