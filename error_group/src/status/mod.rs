//! Status codes and the combined error+status aggregator.

mod group;

pub use group::ErrorStatusGroup;

use serde::{Deserialize, Serialize};

use crate::accumulator::Tally;

/// Opaque, totally ordered status code.
///
/// Groups never interpret a status; they only store and compare it. Negative
/// values are accepted.
pub type Status = i64;

/// Status assumed before anything has been recorded ("no error occurred").
pub const DEFAULT_STATUS_BASELINE: Status = 200;

/// Lowest and highest status seen so far.
///
/// Before any status is recorded both bounds equal the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusRange {
    lowest: Status,
    highest: Status,
}

impl StatusRange {
    /// Range containing only `baseline`.
    #[must_use]
    pub const fn baseline(baseline: Status) -> Self {
        Self {
            lowest: baseline,
            highest: baseline,
        }
    }

    /// Range with explicit bounds.
    #[must_use]
    pub const fn new(lowest: Status, highest: Status) -> Self {
        Self { lowest, highest }
    }

    /// Lowest status seen.
    #[must_use]
    pub const fn lowest(self) -> Status {
        self.lowest
    }

    /// Highest status seen.
    #[must_use]
    pub const fn highest(self) -> Status {
        self.highest
    }

    /// Returns `true` when `status` lies within the range, bounds included.
    #[must_use]
    pub const fn contains(self, status: Status) -> bool {
        self.lowest <= status && status <= self.highest
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self::baseline(DEFAULT_STATUS_BASELINE)
    }
}

/// How the baseline takes part in the running range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePolicy {
    /// The baseline is reported only until the first status is recorded;
    /// from then on the range covers recorded statuses alone.
    #[default]
    UntilFirstStatus,
    /// The baseline stays part of the range, so the lowest status never
    /// exceeds it and the highest never falls below it.
    Included,
}

/// Range kept under the status lock, aware of whether anything was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusTally {
    range: StatusRange,
    policy: BaselinePolicy,
    observed: bool,
}

impl StatusTally {
    pub(crate) const fn new(baseline: Status, policy: BaselinePolicy) -> Self {
        Self {
            range: StatusRange::baseline(baseline),
            policy,
            observed: false,
        }
    }

    pub(crate) const fn range(self) -> StatusRange {
        self.range
    }
}

impl Tally<Status> for StatusTally {
    fn observe(&mut self, value: &Status) {
        let status = *value;
        if !self.observed && self.policy == BaselinePolicy::UntilFirstStatus {
            self.range = StatusRange::baseline(status);
        }
        self.observed = true;
        if status < self.range.lowest {
            self.range.lowest = status;
        }
        if status > self.range.highest {
            self.range.highest = status;
        }
    }
}
