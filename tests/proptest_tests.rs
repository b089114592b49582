//! Property-based tests using proptest.
//!
//! These tests check invariants that must hold for every input, whatever a
//! user manages to type or paste into a field.

use input_mask::{
    credit_card_type, cursor::CursorTracker, format_credit_card, format_date, format_general,
    format_numeral, format_time, strip_delimiters, unformat_credit_card, CardBrand,
    CreditCardOptions, CursorTrackerOptions, DateOptions, GeneralOptions, Mask, NumeralOptions,
    TimeOptions, MAX_CARD_DIGITS,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Mixes separators (spaces, dashes, slashes) into a digit string.
fn with_separators(digits: String) -> impl Strategy<Value = String> {
    let len = digits.len();
    proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("-"), Just("/"), Just(" - ")], len + 1)
        .prop_map(move |seps| {
            let mut result = String::new();
            for (i, c) in digits.chars().enumerate() {
                result.push_str(seps[i]);
                result.push(c);
            }
            result.push_str(seps[len]);
            result
        })
}

/// Any of the built-in masks with default options.
fn any_mask() -> impl Strategy<Value = Mask> {
    prop_oneof![
        Just(Mask::from(CreditCardOptions::default())),
        Just(Mask::from(DateOptions::default())),
        Just(Mask::from(TimeOptions::default())),
        Just(Mask::from(NumeralOptions::default())),
        Just(Mask::from(input_mask::PhoneOptions::default())),
        Just(Mask::from(GeneralOptions::new(vec![3, 3, 4]))),
    ]
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Formatting a formatted value changes nothing.
    #[test]
    fn format_is_idempotent(mask in any_mask(), digits in digit_string_range(0..=20)) {
        let once = mask.format(&digits);
        prop_assert_eq!(mask.format(&once), once.clone(), "{} on {:?}", mask, digits);
    }

    /// Property: Reformatting the unformatted value gives the same display.
    #[test]
    fn unformat_then_format_is_stable(mask in any_mask(), digits in digit_string_range(0..=20)) {
        let once = mask.format(&digits);
        prop_assert_eq!(mask.format(&mask.unformat(&once)), once);
    }

    /// Property: Separators in the input do not change the card display.
    #[test]
    fn card_ignores_separators(
        formatted in digit_string_range(1..=19).prop_flat_map(|d| (Just(d.clone()), with_separators(d)))
    ) {
        let (digits, noisy) = formatted;
        let options = CreditCardOptions::default();
        prop_assert_eq!(format_credit_card(&noisy, &options), format_credit_card(&digits, &options));
    }

    /// Property: Card digits survive formatting up to the brand's length.
    #[test]
    fn card_keeps_leading_digits(digits in digit_string_range(0..=25)) {
        let options = CreditCardOptions::default();
        let kept = unformat_credit_card(&format_credit_card(&digits, &options));
        let brand = credit_card_type(&digits);

        prop_assert!(digits.starts_with(&kept));
        prop_assert_eq!(kept.len(), digits.len().min(brand.max_digits()));
    }

    /// Property: Strict mode never keeps more than 19 digits.
    #[test]
    fn strict_card_length(digits in digit_string_range(0..=30)) {
        let options = CreditCardOptions {
            strict_mode: true,
            ..Default::default()
        };
        let kept = unformat_credit_card(&format_credit_card(&digits, &options));
        prop_assert!(kept.len() <= MAX_CARD_DIGITS);
    }

    /// Property: Detection only depends on the leading digits.
    #[test]
    fn detection_is_prefix_stable(prefix in digit_string(4), rest in digit_string_range(0..=12)) {
        let brand = credit_card_type(&prefix);
        if brand != CardBrand::General {
            prop_assert_eq!(credit_card_type(&format!("{}{}", prefix, rest)), brand);
        }
    }

    /// Property: Block content never exceeds the sum of the block widths.
    #[test]
    fn general_respects_block_lengths(
        blocks in proptest::collection::vec(1usize..=5, 1..=5),
        value in "[a-z0-9]{0,40}",
    ) {
        let options = GeneralOptions {
            delimiter: "-".into(),
            ..GeneralOptions::new(blocks.clone())
        };
        let formatted = format_general(&value, &options);
        let content = strip_delimiters(&formatted, &["-"]);

        prop_assert!(content.chars().count() <= blocks.iter().sum::<usize>());
        prop_assert!(value.starts_with(&content));
    }
}

// =============================================================================
// DATE AND TIME PROPERTIES
// =============================================================================

proptest! {
    /// Property: A complete day and month are always in range.
    #[test]
    fn complete_date_is_in_range(digits in digit_string(8)) {
        let formatted = format_date(&digits, &DateOptions::default());
        let parts: Vec<&str> = formatted.split('-').collect();
        prop_assert_eq!(parts.len(), 3, "{}", formatted);

        let day: u32 = parts[0].parse().unwrap();
        let month: u32 = parts[1].parse().unwrap();
        let year: u32 = parts[2].parse().unwrap();

        prop_assert!((1..=12).contains(&month), "{}", formatted);
        prop_assert!(day >= 1, "{}", formatted);
        prop_assert!(day <= input_mask::date::days_in_month(month, Some(year)), "{}", formatted);
    }

    /// Property: A complete time is a valid time of day.
    #[test]
    fn complete_time_is_in_range(digits in digit_string(6)) {
        let formatted = format_time(&digits, &TimeOptions::default());
        let parts: Vec<u32> = formatted.split(':').map(|p| p.parse().unwrap()).collect();

        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[0] <= 23);
        prop_assert!(parts[1] <= 59);
        prop_assert!(parts[2] <= 59);
    }

    /// Property: Date output only holds digits and the delimiter.
    #[test]
    fn date_output_is_clean(value in ".{0,30}") {
        let formatted = format_date(&value, &DateOptions::default());
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == '-'));
    }
}

// =============================================================================
// NUMERAL PROPERTIES
// =============================================================================

proptest! {
    /// Property: Grouping keeps the integer digits.
    #[test]
    fn numeral_keeps_integer_digits(int in "[1-9][0-9]{0,14}") {
        let formatted = format_numeral(&int, &NumeralOptions::default());
        prop_assert_eq!(digits_of(&formatted), int);
    }

    /// Property: The decimal part never exceeds the scale.
    #[test]
    fn numeral_decimal_scale(int in digit_string_range(1..=6), dec in digit_string_range(0..=8), scale in 0usize..=4) {
        let options = NumeralOptions {
            decimal_scale: scale,
            ..Default::default()
        };
        let formatted = format_numeral(&format!("{}.{}", int, dec), &options);
        let decimals = formatted.split('.').nth(1).map_or(0, |d| d.len());
        prop_assert!(decimals <= scale);
    }
}

// =============================================================================
// CURSOR PROPERTIES
// =============================================================================

proptest! {
    /// Property: The caret is always inside the new value.
    #[test]
    fn caret_stays_in_bounds(
        mask in any_mask(),
        previous in ".{0,20}",
        raw in ".{0,20}",
        caret in 0usize..30,
    ) {
        let edit = mask.apply(&previous, &raw, caret);
        prop_assert!(edit.caret <= edit.value.chars().count());
    }

    /// Property: After typing a digit, the caret sits right after it.
    #[test]
    fn caret_follows_inserted_digit(
        digits in digit_string_range(0..=8),
        at in 0usize..=8,
        typed in prop::char::range('0', '9'),
    ) {
        let options = GeneralOptions {
            delimiter: " ".into(),
            numeric_only: true,
            ..GeneralOptions::new(vec![3, 3, 3])
        };
        let mask = Mask::from(options);
        let previous = mask.format(&digits);

        // insert at a content position, mapped into the formatted value
        let at = at.min(digits.len());
        let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&[" "]));
        let position = input_mask::cursor::dirty_cursor_index(&previous, at, &[" "]);

        let mut chars: Vec<char> = previous.chars().collect();
        chars.insert(position, typed);
        let raw: String = chars.into_iter().collect();

        let next = mask.format(&raw);
        let caret = tracker.track(&previous, &raw, position + 1, &next);

        let before: String = next.chars().take(caret).collect();
        prop_assert_eq!(digits_of(&before).len(), at + 1, "{:?} -> {:?} at {}", raw, next, caret);
        prop_assert_eq!(digits_of(&before).chars().last(), Some(typed));
    }

    /// Property: For every mask, typing a digit never leaves the caret in
    /// front of it, even when the formatter pads or inserts delimiters.
    #[test]
    fn caret_never_falls_behind_typed_digit(
        mask in prop_oneof![
            any_mask(),
            Just(Mask::from(NumeralOptions {
                prefix: "$".to_string(),
                ..Default::default()
            })),
        ],
        digits in digit_string_range(1..=10),
        at in 0usize..=10,
        typed in prop::char::range('0', '9'),
    ) {
        let delimiters = mask.delimiters();
        let is_content = |c: &char| !delimiters.iter().any(|d| d.contains(*c));
        let prefix_len = mask.prefix().chars().count();

        let previous = mask.format(&digits);
        let body: String = previous.chars().skip(prefix_len).collect();
        let at = at.min(body.chars().filter(is_content).count());
        let position = prefix_len + input_mask::cursor::dirty_cursor_index(&body, at, &delimiters);

        let mut chars: Vec<char> = previous.chars().collect();
        chars.insert(position.min(chars.len()), typed);
        let raw: String = chars.into_iter().collect();

        let edit = mask.apply(&previous, &raw, position + 1);
        let len = edit.value.chars().count();
        let content_before = edit.value.chars().take(edit.caret).skip(prefix_len).filter(is_content).count();
        let content_total = edit.value.chars().skip(prefix_len).filter(is_content).count();

        prop_assert!(edit.caret <= len);
        prop_assert!(edit.caret >= prefix_len.min(len), "{} {:?} -> {:?} at {}", mask, raw, edit.value, edit.caret);
        prop_assert!(
            content_before >= (at + 1).min(content_total),
            "{} {:?} -> {:?} at {}", mask, raw, edit.value, edit.caret
        );
    }
}

// =============================================================================
// ROBUSTNESS
// =============================================================================

proptest! {
    /// Property: No mask panics on arbitrary input.
    #[test]
    fn no_panic_on_arbitrary_input(mask in any_mask(), value in ".*") {
        let _ = mask.format(&value);
        let _ = mask.unformat(&value);
    }

    /// Property: The delimiter stripper removes every delimiter character.
    #[test]
    fn strip_removes_delimiters(value in "[0-9 ./-]{0,40}") {
        let stripped = strip_delimiters(&value, &[" ", ".", "/", "-"]);
        prop_assert!(stripped.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(stripped, digits_of(&value));
    }
}
