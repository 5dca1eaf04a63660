//! Thread-safe aggregation of errors and status codes.
//!
//! Fan work out to many tasks, let each task report into one shared group,
//! then reduce the group into a single summary once the tasks are done.
//!
//! - [`ErrorGroup`] collects errors.
//! - [`ErrorStatusGroup`] collects errors and integer status codes, tracking
//!   the lowest and highest status seen.
//!
//! Both are built on [`Accumulator`], an ordered sequence guarded by its own
//! lock. Recording never fails; reading the first or last entry of an empty
//! sequence returns [`GroupError::Empty`] instead of panicking, and
//! reductions return `None` rather than an error with an empty message.
//!
//! ```
//! use std::sync::Arc;
//! use error_group::ErrorStatusGroup;
//!
//! let group = Arc::new(ErrorStatusGroup::new());
//! let handles: Vec<_> = [200, 404, 200]
//!     .into_iter()
//!     .map(|status| {
//!         let group = Arc::clone(&group);
//!         std::thread::spawn(move || {
//!             if status == 200 {
//!                 group.add_status(status);
//!             } else {
//!                 group.add_status_and_error(status, format!("lookup returned {status}"));
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().expect("worker panicked");
//! }
//!
//! assert_eq!(group.len_statuses(), 3);
//! assert_eq!(group.to_result().map_err(|err| err.len()), Err(1));
//! ```

mod accumulator;
mod config;
mod error;
mod group;
mod render;
mod status;

pub use accumulator::{Accumulator, Tally};
pub use config::GroupConfig;
pub use error::{BoxError, CombinedError, GroupError, GroupResult, Sequence, SharedError};
pub use group::ErrorGroup;
pub use status::{
    BaselinePolicy, DEFAULT_STATUS_BASELINE, ErrorStatusGroup, Status, StatusRange,
};
