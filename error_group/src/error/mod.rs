//! Error types produced by the aggregators.

mod combined;
mod types;

pub use combined::CombinedError;
pub use types::{GroupError, GroupResult, Sequence};

pub(crate) use types::require;

use std::{error::Error, sync::Arc};

/// Error value stored by a group.
///
/// Entries are shared so snapshots returned by `all()` clone pointers rather
/// than the errors themselves.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Owned, type-erased error accepted by the `add*` operations.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;
