use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::Cow;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Trim leading and trailing C0 controls and spaces.
/// Returns the trimmed slice and whether anything was removed.
pub fn trim_c0_control_or_space(input: &str) -> (&str, bool) {
    let trimmed = input.trim_matches(is_c0_control_or_space);
    (trimmed, trimmed.len() != input.len())
}

/// Remove every ASCII tab and newline.
/// Returns a Cow to avoid allocation when possible, and whether anything was removed.
pub fn remove_tabs_and_newlines(input: &str) -> (Cow<'_, str>, bool) {
    if !has_tabs_or_newline(input) {
        return (Cow::Borrowed(input), false);
    }

    let cleaned = input
        .chars()
        .filter(|&c| !is_ascii_tab_or_newline(c))
        .collect();
    (Cow::Owned(cleaned), true)
}
