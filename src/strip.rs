//! Delimiter stripping and related character filters.
//!
//! Delimiters are user-supplied strings, so they are matched literally one
//! character at a time. A delimiter such as `"."` or `"(*)"` removes exactly
//! those characters and nothing else.

/// Removes every character of every delimiter from `value`.
///
/// Each delimiter is treated as a set of characters, so the order in which
/// delimiters are given does not change the result.
///
/// # Example
///
/// ```
/// use input_mask::strip::strip_delimiters;
///
/// assert_eq!(strip_delimiters("31-12-2023", &["-"]), "31122023");
/// assert_eq!(strip_delimiters("1.234.567", &["."]), "1234567");
/// assert_eq!(strip_delimiters("(12) 34", &["(", ") "]), "1234");
/// ```
pub fn strip_delimiters<S: AsRef<str>>(value: &str, delimiters: &[S]) -> String {
    if delimiters.iter().all(|d| d.as_ref().is_empty()) {
        return value.to_string();
    }

    value
        .chars()
        .filter(|&c| !is_delimiter_char(c, delimiters))
        .collect()
}

/// Returns true if `c` is one of the characters of any delimiter.
#[inline]
pub fn is_delimiter_char<S: AsRef<str>>(c: char, delimiters: &[S]) -> bool {
    delimiters.iter().any(|d| d.as_ref().contains(c))
}

/// Keeps ASCII digits only.
///
/// # Example
///
/// ```
/// use input_mask::strip::strip_non_numeric;
///
/// assert_eq!(strip_non_numeric("4111-1111 abc"), "41111111");
/// ```
pub fn strip_non_numeric(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns the first `length` characters of `value`.
///
/// Counts characters, not bytes, so multi-byte input is never split.
pub fn head(value: &str, length: usize) -> String {
    value.chars().take(length).collect()
}

/// Removes `prefix` from the start of `value`.
///
/// When the value does not start with the full prefix (the user deleted part
/// of it), the leading characters that still match the prefix in order are
/// dropped instead.
pub(crate) fn strip_prefix(value: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return value.to_string();
    }
    if let Some(rest) = value.strip_prefix(prefix) {
        return rest.to_string();
    }

    let matched = value
        .chars()
        .zip(prefix.chars())
        .take_while(|(a, b)| a == b)
        .count();
    value.chars().skip(matched).collect()
}
