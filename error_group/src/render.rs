//! Message rendering shared by the group reductions.

use crate::{error::SharedError, status::StatusRange};

/// Join every entry's message with `\n`, without a trailing newline.
pub(crate) fn join_messages(entries: &[SharedError]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status header followed by the joined messages.
///
/// Returns an empty string when `entries` is empty; the header alone never
/// counts as a failure report.
pub(crate) fn status_report(range: StatusRange, entries: &[SharedError]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    format!(
        "lowest status: [{}]\nhighest status: [{}]\n{}",
        range.lowest(),
        range.highest(),
        join_messages(entries)
    )
}
