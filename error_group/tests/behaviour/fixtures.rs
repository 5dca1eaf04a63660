//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use error_group::{CombinedError, ErrorGroup, ErrorStatusGroup, SharedError, Status};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state for the error-only group.
#[derive(Debug, Default, ScenarioState)]
pub struct ErrorContext {
    pub group: Slot<Arc<ErrorGroup>>,
    pub snapshot: Slot<Vec<SharedError>>,
}

/// Scenario state for the error+status group.
#[derive(Debug, Default, ScenarioState)]
pub struct StatusContext {
    pub group: Slot<Arc<ErrorStatusGroup>>,
    pub reduced_status: Slot<Status>,
    pub reduced_error: Slot<Option<CombinedError>>,
}

/// Creates a clean error-only scenario state.
#[fixture]
pub fn error_context() -> ErrorContext {
    ErrorContext::default()
}

/// Creates a clean error+status scenario state.
#[fixture]
pub fn status_context() -> StatusContext {
    StatusContext::default()
}
