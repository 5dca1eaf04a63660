//! Steps driving the error-only group.

use std::sync::Arc;

use crate::fixtures::ErrorContext;
use anyhow::{Result, anyhow, ensure};
use error_group::ErrorGroup;
use rstest_bdd_macros::{given, then, when};
use test_helpers::{Failure, failure, text};

fn group(error_context: &ErrorContext) -> Result<Arc<ErrorGroup>> {
    error_context
        .group
        .get()
        .ok_or_else(|| anyhow!("error group has not been created"))
}

#[given("an empty error group")]
fn empty_group(error_context: &ErrorContext) -> Result<()> {
    ensure!(
        error_context.group.is_empty(),
        "error group already initialised"
    );
    error_context.group.set(Arc::new(ErrorGroup::new()));
    Ok(())
}

#[when("the errors {messages} are added")]
fn add_errors(error_context: &ErrorContext, messages: String) -> Result<()> {
    let group = group(error_context)?;
    for message in text::split_list(&messages) {
        group.add(failure(message));
    }
    Ok(())
}

#[when("an absent error is added")]
fn add_absent(error_context: &ErrorContext) -> Result<()> {
    group(error_context)?.add_optional(None::<Failure>);
    Ok(())
}

#[when("a snapshot is taken")]
fn take_snapshot(error_context: &ErrorContext) -> Result<()> {
    let snapshot = group(error_context)?.all();
    error_context.snapshot.set(snapshot);
    Ok(())
}

#[then("the error group holds {count:usize} errors")]
fn holds_errors(error_context: &ErrorContext, count: usize) -> Result<()> {
    let len = group(error_context)?.len();
    ensure!(len == count, "expected {count} errors, found {len}");
    Ok(())
}

#[then("the snapshot holds {count:usize} errors")]
fn snapshot_holds(error_context: &ErrorContext, count: usize) -> Result<()> {
    let snapshot = error_context
        .snapshot
        .get()
        .ok_or_else(|| anyhow!("no snapshot was taken"))?;
    ensure!(
        snapshot.len() == count,
        "expected {count} errors in snapshot, found {}",
        snapshot.len()
    );
    Ok(())
}

#[then("the error report is {expected}")]
fn error_report(error_context: &ErrorContext, expected: String) -> Result<()> {
    let group = group(error_context)?;
    let expected = text::unescape_newlines(&expected);
    ensure!(
        group.message() == expected,
        "unexpected report: {:?}",
        group.message()
    );
    let combined = group
        .to_error()
        .ok_or_else(|| anyhow!("expected a combined error"))?;
    ensure!(combined.to_string() == expected, "combined error differs from report");
    Ok(())
}

#[then("the first error is {first} and the last is {last}")]
fn first_and_last(error_context: &ErrorContext, first: String, last: String) -> Result<()> {
    let group = group(error_context)?;
    let found_first = group.first()?.to_string();
    let found_last = group.last()?.to_string();
    ensure!(found_first == text::unquote(&first), "first was {found_first}");
    ensure!(found_last == text::unquote(&last), "last was {found_last}");
    Ok(())
}

#[then("the error group reduces to no error")]
fn reduces_to_nothing(error_context: &ErrorContext) -> Result<()> {
    let group = group(error_context)?;
    ensure!(group.message().is_empty(), "report should be empty");
    ensure!(group.to_error().is_none(), "no combined error expected");
    Ok(())
}
