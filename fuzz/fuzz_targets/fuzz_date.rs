//! Fuzz target for date and time formatting.
//!
//! Tests that pattern parsing, bound parsing and formatting never panic.

#![no_main]

use arbitrary::Arbitrary;
use input_mask::{format_date, format_time, DateBound, DateOptions, DatePattern, TimeOptions, TimePattern};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    value: &'a str,
    pattern: &'a str,
    min: &'a str,
    max: &'a str,
    twelve_hour: bool,
    lazy_show: bool,
}

fuzz_target!(|input: Input<'_>| {
    // These should never panic
    let _ = input.pattern.parse::<DatePattern>();
    let _ = input.pattern.parse::<TimePattern>();
    let _ = input.min.parse::<DateBound>();

    let options = DateOptions {
        pattern: input.pattern.parse().unwrap_or_default(),
        min: input.min.parse().ok(),
        max: input.max.parse().ok(),
        lazy_show: input.lazy_show,
        ..Default::default()
    };
    if options.validate().is_ok() {
        let _ = format_date(input.value, &options);
    }

    let time = TimeOptions {
        pattern: input.pattern.parse().unwrap_or_default(),
        format: if input.twelve_hour { "12" } else { "24" }.parse().unwrap_or_default(),
        lazy_show: input.lazy_show,
        ..Default::default()
    };
    let _ = format_time(input.value, &time);
});
