//! Text normalisation helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Splits a comma-separated step argument into unquoted, non-empty items.
///
/// Gherkin steps cannot carry lists, so scenarios write them inline:
/// `"first", "middle", "last"`.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(unquote)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Undoes the `\n` escapes a feature file uses to spell out multi-line text.
#[must_use]
pub fn unescape_newlines(value: &str) -> String {
    unquote(value).replace("\\n", "\n")
}
