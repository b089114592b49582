//! Caret tracking across reformatting.
//!
//! When a formatter inserts or removes delimiters, the caret of the input
//! element must move with the content the user typed rather than stay at the
//! same raw offset. The mapping goes through a "clean" index, counted over
//! non-delimiter characters only:
//!
//! 1. count the content characters before the caret in the raw value;
//! 2. find the position after that many content characters in the formatted
//!    value, counting content the formatter added (a zero pad) as typed;
//! 3. when typing, step over delimiters the formatter placed right at the
//!    caret, so the user keeps typing through them.
//!
//! All offsets are character offsets.
//!
//! # Example
//!
//! ```
//! use input_mask::cursor::{CursorTracker, CursorTrackerOptions};
//!
//! let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
//!
//! // "12-3" was shown, the user typed "4" in front of the "3"
//! let caret = tracker.track("12-3", "12-43", 4, "12-43");
//! assert_eq!(caret, 4);
//!
//! // "1" was shown, typing "2" makes the formatter append a delimiter
//! assert_eq!(tracker.track("1", "12", 2, "12-"), 3);
//! ```

use crate::blocks::Delimiter;
use crate::strip::is_delimiter_char;

/// Counts the non-delimiter characters before `dirty_index` in `value`.
///
/// # Example
///
/// ```
/// use input_mask::cursor::clean_cursor_index;
///
/// assert_eq!(clean_cursor_index("12-34-", 4, &["-"]), 3);
/// ```
pub fn clean_cursor_index<S: AsRef<str>>(value: &str, dirty_index: usize, delimiters: &[S]) -> usize {
    value
        .chars()
        .take(dirty_index)
        .filter(|&c| !is_delimiter_char(c, delimiters))
        .count()
}

/// Returns the offset just past the `clean_index`-th non-delimiter character
/// of `value`.
///
/// A clean index of zero maps to offset zero; an index beyond the content maps
/// to the end of the value.
///
/// # Example
///
/// ```
/// use input_mask::cursor::dirty_cursor_index;
///
/// assert_eq!(dirty_cursor_index("12-34-", 3, &["-"]), 4);
/// assert_eq!(dirty_cursor_index("12-34-", 9, &["-"]), 6);
/// ```
pub fn dirty_cursor_index<S: AsRef<str>>(value: &str, clean_index: usize, delimiters: &[S]) -> usize {
    if clean_index == 0 {
        return 0;
    }

    let mut seen = 0;
    for (i, c) in value.chars().enumerate() {
        if !is_delimiter_char(c, delimiters) {
            seen += 1;
            if seen == clean_index {
                return i + 1;
            }
        }
    }
    value.chars().count()
}

/// Delimiters and prefix of the mask whose caret is tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorTrackerOptions {
    /// Strings the formatter inserts; each of their characters counts as a
    /// delimiter.
    pub delimiters: Vec<String>,
    /// Fixed text in front of the editable content.
    pub prefix: String,
}

impl CursorTrackerOptions {
    /// Options with the given delimiters and no prefix.
    pub fn with_delimiters<S: AsRef<str>>(delimiters: &[S]) -> Self {
        Self {
            delimiters: delimiters.iter().map(|d| d.as_ref().to_string()).collect(),
            prefix: String::new(),
        }
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl From<&Delimiter> for CursorTrackerOptions {
    fn from(delimiter: &Delimiter) -> Self {
        Self::with_delimiters(&delimiter.all())
    }
}

/// Pure caret mapping for one mask configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorTracker {
    options: CursorTrackerOptions,
}

impl CursorTracker {
    /// Creates a tracker.
    pub fn new(options: CursorTrackerOptions) -> Self {
        Self { options }
    }

    /// The tracker's configuration.
    pub fn options(&self) -> &CursorTrackerOptions {
        &self.options
    }

    fn is_delimiter(&self, c: char) -> bool {
        is_delimiter_char(c, &self.options.delimiters)
    }

    fn content_len(&self, value: &str) -> usize {
        value.chars().filter(|&c| !self.is_delimiter(c)).count()
    }

    /// Computes the caret offset in `next`.
    ///
    /// * `previous` - the formatted value shown before the edit
    /// * `raw` - the element value right after the edit, before reformatting
    /// * `caret` - the caret offset in `raw`
    /// * `next` - the reformatted value
    ///
    /// The result is always within `[prefix length, length of next]` when
    /// `next` carries the prefix, and never beyond the end of `next`.
    pub fn track(&self, previous: &str, raw: &str, caret: usize, next: &str) -> usize {
        let prefix_len = self.options.prefix.chars().count();
        let raw_len = raw.chars().count();
        let next_len = next.chars().count();
        let deleting = raw_len < previous.chars().count();

        let caret = caret.min(raw_len);
        let raw_body: String = raw.chars().skip(prefix_len).collect();
        let next_body: String = next.chars().skip(prefix_len).collect();
        let body_caret = caret.saturating_sub(prefix_len);

        let mut clean = clean_cursor_index(&raw_body, body_caret, &self.options.delimiters);
        if !deleting {
            // content the formatter added, such as a zero pad, sits before the caret
            let gained = self.content_len(&next_body).saturating_sub(self.content_len(&raw_body));
            if gained > 0 {
                tracing::trace!(clean, gained, "caret moved past padded content");
            }
            clean += gained;
        }
        let mut dirty = dirty_cursor_index(&next_body, clean, &self.options.delimiters);

        let at_raw_delimiter = raw_body
            .chars()
            .nth(body_caret)
            .is_some_and(|c| self.is_delimiter(c));

        if !deleting && !at_raw_delimiter {
            let skipped = next_body
                .chars()
                .skip(dirty)
                .take_while(|&c| self.is_delimiter(c))
                .count();
            if skipped > 0 {
                tracing::trace!(from = dirty, skipped, "caret stepped over inserted delimiter");
            }
            dirty += skipped;
        }

        (dirty + prefix_len).min(next_len)
    }
}

/// The value and caret of an editable text element.
///
/// Implemented by whatever owns the live element: a DOM binding, a terminal
/// line editor or a test double.
pub trait TextInput {
    /// The current value.
    fn value(&self) -> String;

    /// The caret offset (end of the selection), in characters.
    fn selection_end(&self) -> usize;

    /// Replaces the value.
    fn set_value(&mut self, value: &str);

    /// Moves the selection.
    fn set_selection_range(&mut self, start: usize, end: usize);
}

/// A cursor tracker bound to one input element.
///
/// Created by [`register_cursor_tracker`]. The element is borrowed for as long
/// as the registration is attached; [`Registration::detach`] releases it and
/// may be called any number of times. Dropping the registration detaches it.
#[derive(Debug)]
pub struct Registration<'a, I: TextInput> {
    input: Option<&'a mut I>,
    tracker: CursorTracker,
    previous: String,
}

impl<'a, I: TextInput> Registration<'a, I> {
    /// Returns true while an element is bound.
    pub fn is_attached(&self) -> bool {
        self.input.is_some()
    }

    /// The tracker used by this registration.
    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    /// The bound element, for the host to apply edits to.
    pub fn input_mut(&mut self) -> Option<&mut I> {
        self.input.as_deref_mut()
    }

    /// Handles one input event.
    ///
    /// Reads the element's edited value and caret, reformats the value with
    /// `format`, writes it back and repositions the caret. Returns the new
    /// caret offset, or `None` when the registration is detached.
    pub fn handle_input<F>(&mut self, format: F) -> Option<usize>
    where
        F: FnOnce(&str) -> String,
    {
        let input = self.input.as_deref_mut()?;

        let raw = input.value();
        let caret = input.selection_end();
        let next = format(&raw);
        let position = self.tracker.track(&self.previous, &raw, caret, &next);

        input.set_value(&next);
        input.set_selection_range(position, position);
        self.previous = next;

        Some(position)
    }

    /// Releases the element. Calling this again is a no-op.
    pub fn detach(&mut self) {
        if self.input.take().is_some() {
            tracing::debug!("cursor tracker detached");
        }
    }
}

impl<I: TextInput> Drop for Registration<'_, I> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Binds a cursor tracker to an input element.
///
/// With no element the returned registration is inert: `handle_input` does
/// nothing and `detach` is a no-op.
///
/// # Example
///
/// ```
/// use input_mask::cursor::{register_cursor_tracker, CursorTrackerOptions, TextInput};
/// use input_mask::date::{format_date, DateOptions};
///
/// #[derive(Default)]
/// struct Field {
///     value: String,
///     caret: usize,
/// }
///
/// impl TextInput for Field {
///     fn value(&self) -> String {
///         self.value.clone()
///     }
///     fn selection_end(&self) -> usize {
///         self.caret
///     }
///     fn set_value(&mut self, value: &str) {
///         self.value = value.to_string();
///     }
///     fn set_selection_range(&mut self, _start: usize, end: usize) {
///         self.caret = end;
///     }
/// }
///
/// let options = DateOptions::default();
/// let mut field = Field::default();
/// let mut registration = register_cursor_tracker(
///     Some(&mut field),
///     CursorTrackerOptions::with_delimiters(&["-"]),
/// );
///
/// for digit in ['3', '1', '1'] {
///     // the host inserts the typed character, then fires the input event
///     if let Some(field) = registration.input_mut() {
///         field.value.push(digit);
///         field.caret += 1;
///     }
///     registration.handle_input(|raw| format_date(raw, &options));
/// }
///
/// registration.detach();
/// registration.detach();
/// assert!(!registration.is_attached());
/// drop(registration);
///
/// assert_eq!(field.value, "31-1");
/// assert_eq!(field.caret, 4);
/// ```
pub fn register_cursor_tracker<I: TextInput>(
    input: Option<&mut I>,
    options: CursorTrackerOptions,
) -> Registration<'_, I> {
    let previous = input.as_deref().map(TextInput::value).unwrap_or_default();
    if input.is_none() {
        tracing::debug!("no input element given, cursor tracker is inert");
    }

    Registration {
        input,
        tracker: CursorTracker::new(options),
        previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Field {
        value: String,
        caret: usize,
    }

    impl Field {
        fn type_at_caret(&mut self, c: char) {
            let mut chars: Vec<char> = self.value.chars().collect();
            chars.insert(self.caret, c);
            self.value = chars.into_iter().collect();
            self.caret += 1;
        }

        fn backspace(&mut self) {
            if self.caret == 0 {
                return;
            }
            let mut chars: Vec<char> = self.value.chars().collect();
            chars.remove(self.caret - 1);
            self.value = chars.into_iter().collect();
            self.caret -= 1;
        }
    }

    impl TextInput for Field {
        fn value(&self) -> String {
            self.value.clone()
        }

        fn selection_end(&self) -> usize {
            self.caret
        }

        fn set_value(&mut self, value: &str) {
            self.value = value.to_string();
        }

        fn set_selection_range(&mut self, _start: usize, end: usize) {
            self.caret = end;
        }
    }

    fn card_like(value: &str) -> String {
        let digits: String = value.chars().filter(char::is_ascii_digit).take(8).collect();
        crate::blocks::format_blocks(&digits, &[4, 4], &Delimiter::from(" "), false)
    }

    #[test]
    fn test_clean_cursor_index() {
        assert_eq!(clean_cursor_index("12-34", 0, &["-"]), 0);
        assert_eq!(clean_cursor_index("12-34", 3, &["-"]), 2);
        assert_eq!(clean_cursor_index("12-34", 5, &["-"]), 4);
        assert_eq!(clean_cursor_index("12-34", 99, &["-"]), 4);
    }

    #[test]
    fn test_dirty_cursor_index() {
        assert_eq!(dirty_cursor_index("12-34", 0, &["-"]), 0);
        assert_eq!(dirty_cursor_index("12-34", 2, &["-"]), 2);
        assert_eq!(dirty_cursor_index("12-34", 3, &["-"]), 4);
        assert_eq!(dirty_cursor_index("(12) 34", 1, &["(", ") "]), 2);
    }

    #[test]
    fn test_typing_through_eager_delimiter() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&[" "]));
        assert_eq!(tracker.track("411", "4111", 4, "4111 "), 5);
    }

    #[test]
    fn test_insert_in_middle_keeps_caret_after_digit() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&[" "]));
        // "1234 5678" with a 9 typed after the 2
        let next = card_like("12934 5678");
        assert_eq!(next, "1293 4567");
        assert_eq!(tracker.track("1234 5678", "12934 5678", 3, &next), 3);
    }

    #[test]
    fn test_caret_before_existing_delimiter_is_not_moved() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
        // typed "5" just before an existing "-"
        assert_eq!(tracker.track("12-34", "125-34", 3, "12-53-4"), 4);
    }

    #[test]
    fn test_deleting_does_not_skip_delimiters() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
        assert_eq!(tracker.track("12-3", "12-", 3, "12-"), 2);
    }

    #[test]
    fn test_caret_follows_zero_pad() {
        let dashes = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
        // "4" cannot start a day, the formatter shows "04-"
        assert_eq!(dashes.track("", "4", 1, "04-"), 3);
        assert_eq!(dashes.track("31-", "31-5", 4, "31-05-"), 6);

        let colons = CursorTracker::new(CursorTrackerOptions::with_delimiters(&[":"]));
        assert_eq!(colons.track("", "9", 1, "09:"), 3);
    }

    #[test]
    fn test_zero_pad_ignored_when_deleting() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
        assert_eq!(tracker.track("04-1", "04-", 3, "04-"), 2);
    }

    #[test]
    fn test_prefix_shifts_indices() {
        let options = CursorTrackerOptions::with_delimiters(&[","]).prefix("$");
        let tracker = CursorTracker::new(options);
        assert_eq!(tracker.track("$123", "$1234", 5, "$1,234"), 6);
        assert_eq!(tracker.track("$1,234", "$1,2934", 5, "$12,934"), 5);
        // caret never lands inside the prefix
        assert_eq!(tracker.track("$1", "$", 0, "$"), 1);
    }

    #[test]
    fn test_result_is_clamped() {
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&["-"]));
        assert_eq!(tracker.track("", "123456789", 9, "12-34"), 5);
        assert_eq!(tracker.track("", "", 4, ""), 0);
    }

    #[test]
    fn test_registration_tracks_keystrokes() {
        let mut field = Field::default();
        let mut registration =
            register_cursor_tracker(Some(&mut field), CursorTrackerOptions::with_delimiters(&[" "]));

        for c in "12345".chars() {
            if let Some(input) = registration.input_mut() {
                input.type_at_caret(c);
            }
            registration.handle_input(card_like);
        }
        drop(registration);
        assert_eq!(field.value, "1234 5");
        assert_eq!(field.caret, 6);
    }

    #[test]
    fn test_registration_backspace_over_delimiter() {
        let mut field = Field {
            value: "1234 ".to_string(),
            caret: 5,
        };
        {
            let mut registration =
                register_cursor_tracker(Some(&mut field), CursorTrackerOptions::with_delimiters(&[" "]));
            if let Some(input) = registration.input_mut() {
                input.backspace();
            }
            assert_eq!(registration.handle_input(card_like), Some(4));
        }
        assert_eq!(field.value, "1234 ");
        assert_eq!(field.caret, 4);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut field = Field::default();
        let mut registration =
            register_cursor_tracker(Some(&mut field), CursorTrackerOptions::default());
        assert!(registration.is_attached());
        registration.detach();
        registration.detach();
        assert!(!registration.is_attached());
        assert_eq!(registration.handle_input(|v| v.to_uppercase()), None);
    }

    #[test]
    fn test_missing_element_is_inert() {
        let mut registration = register_cursor_tracker::<Field>(None, CursorTrackerOptions::default());
        assert!(!registration.is_attached());
        assert_eq!(registration.handle_input(|v| v.to_string()), None);
        registration.detach();
    }

    #[test]
    fn test_options_from_delimiter() {
        let options = CursorTrackerOptions::from(&Delimiter::from(&[".", "-"][..]));
        assert_eq!(options.delimiters, vec![".".to_string(), "-".to_string()]);
    }
}
