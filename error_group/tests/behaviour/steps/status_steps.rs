//! Steps driving the error+status group.

use std::sync::Arc;

use crate::fixtures::StatusContext;
use anyhow::{Result, anyhow, ensure};
use error_group::{ErrorStatusGroup, Status};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{failure, fan_out, text};

fn group(status_context: &StatusContext) -> Result<Arc<ErrorStatusGroup>> {
    status_context
        .group
        .get()
        .ok_or_else(|| anyhow!("error status group has not been created"))
}

#[given("a fresh error status group")]
fn fresh_group(status_context: &StatusContext) -> Result<()> {
    ensure!(
        status_context.group.is_empty(),
        "error status group already initialised"
    );
    status_context.group.set(Arc::new(ErrorStatusGroup::new()));
    Ok(())
}

#[when("status {status:i64} is recorded with error {message}")]
fn record_pair(status_context: &StatusContext, status: Status, message: String) -> Result<()> {
    group(status_context)?.add_status_and_error(status, failure(text::unquote(&message)));
    Ok(())
}

#[when("{count:usize} more statuses of {status:i64} are recorded with error {message}")]
fn record_pairs(
    status_context: &StatusContext,
    count: usize,
    status: Status,
    message: String,
) -> Result<()> {
    let group = group(status_context)?;
    let message = text::unquote(&message);
    for _ in 0..count {
        group.add_status_and_error(status, failure(message));
    }
    Ok(())
}

#[when("{count:usize} errors are recorded concurrently")]
fn record_concurrently(status_context: &StatusContext, count: usize) -> Result<()> {
    let group = group(status_context)?;
    fan_out(16, count, |index| {
        group.add_error(failure(format!("task {index}")));
    })
}

#[when("the group is reduced")]
fn reduce(status_context: &StatusContext) -> Result<()> {
    let (status, err) = group(status_context)?.to_status_and_error();
    status_context.reduced_status.set(status);
    status_context.reduced_error.set(err);
    Ok(())
}

#[then("the group holds {errors:usize} errors and {statuses:usize} statuses")]
fn holds(status_context: &StatusContext, errors: usize, statuses: usize) -> Result<()> {
    let group = group(status_context)?;
    ensure!(
        group.len_errors() == errors,
        "expected {errors} errors, found {}",
        group.len_errors()
    );
    ensure!(
        group.len_statuses() == statuses,
        "expected {statuses} statuses, found {}",
        group.len_statuses()
    );
    Ok(())
}

#[then("the status range is {lowest:i64} to {highest:i64}")]
fn status_range(status_context: &StatusContext, lowest: Status, highest: Status) -> Result<()> {
    let group = group(status_context)?;
    ensure!(group.lowest_status() == lowest, "lowest was {}", group.lowest_status());
    ensure!(
        group.highest_status() == highest,
        "highest was {}",
        group.highest_status()
    );
    Ok(())
}

#[then("the report starts with {prefix}")]
fn report_prefix(status_context: &StatusContext, prefix: String) -> Result<()> {
    let report = group(status_context)?.message();
    let prefix = text::unescape_newlines(&prefix);
    ensure!(report.starts_with(&prefix), "unexpected report: {report:?}");
    Ok(())
}

#[then("the reduced status is {expected:i64}")]
fn reduced_status(status_context: &StatusContext, expected: Status) -> Result<()> {
    let status = status_context
        .reduced_status
        .get()
        .ok_or_else(|| anyhow!("group has not been reduced"))?;
    ensure!(status == expected, "reduced status was {status}");
    Ok(())
}

#[then("the combined error mentions {fragment}")]
fn combined_mentions(status_context: &StatusContext, fragment: String) -> Result<()> {
    let combined = status_context
        .reduced_error
        .get()
        .flatten()
        .ok_or_else(|| anyhow!("expected a combined error"))?;
    let fragment = text::unquote(&fragment);
    ensure!(
        combined.to_string().contains(fragment),
        "combined error lacks {fragment:?}: {combined}"
    );
    Ok(())
}

#[then("no combined error is produced")]
fn no_combined_error(status_context: &StatusContext) -> Result<()> {
    let reduced = status_context
        .reduced_error
        .get()
        .ok_or_else(|| anyhow!("group has not been reduced"))?;
    ensure!(reduced.is_none(), "unexpected combined error");
    Ok(())
}
