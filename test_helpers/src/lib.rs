//! Test helpers shared across the workspace.
//!
//! - [`fan_out`] runs a closure on many threads released together.
//! - [`failure`] provides a plain error type for tests to record.
//! - [`text`] normalises values captured from behavioural steps.

pub mod failure;
pub mod fan_out;
pub mod text;

pub use failure::{Failure, failure};
pub use fan_out::fan_out;
