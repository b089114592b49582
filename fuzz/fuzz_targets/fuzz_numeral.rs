//! Fuzz target for numeral formatting.
//!
//! Tests that numeral formatting never panics for any option combination
//! and that the integer digits survive grouping.

#![no_main]

use arbitrary::Arbitrary;
use input_mask::{format_numeral, unformat_numeral, GroupStyle, NumeralOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    value: &'a str,
    prefix: &'a str,
    integer_scale: u8,
    decimal_scale: u8,
    style: u8,
    strip_leading_zeroes: bool,
    positive_only: bool,
    tail_prefix: bool,
    sign_before_prefix: bool,
}

fuzz_target!(|input: Input<'_>| {
    let group_style = match input.style % 4 {
        0 => GroupStyle::Thousand,
        1 => GroupStyle::Lakh,
        2 => GroupStyle::Wan,
        _ => GroupStyle::None,
    };

    let options = NumeralOptions {
        prefix: input.prefix.to_string(),
        integer_scale: usize::from(input.integer_scale),
        decimal_scale: usize::from(input.decimal_scale),
        group_style,
        strip_leading_zeroes: input.strip_leading_zeroes,
        positive_only: input.positive_only,
        tail_prefix: input.tail_prefix,
        sign_before_prefix: input.sign_before_prefix,
        ..Default::default()
    };

    // These should never panic
    let formatted = format_numeral(input.value, &options);
    let _ = unformat_numeral(input.value, &options);
    let _ = unformat_numeral(&formatted, &options);

    // Plain grouping keeps every integer digit
    let plain = NumeralOptions::default();
    let digits: String = input.value.chars().filter(char::is_ascii_digit).collect();
    if !digits.is_empty() && !digits.starts_with('0') {
        let grouped = format_numeral(&digits, &plain);
        let regrouped: String = grouped.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(regrouped, digits, "grouping should keep the digits");
    }
});
