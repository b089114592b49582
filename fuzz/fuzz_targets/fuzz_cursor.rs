//! Fuzz target for the cursor tracker.
//!
//! Tests that caret tracking never panics and always lands inside the new
//! value.

#![no_main]

use arbitrary::Arbitrary;
use input_mask::{cursor::clean_cursor_index, cursor::dirty_cursor_index, Mask};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    mask: u8,
    previous: &'a str,
    raw: &'a str,
    caret: u16,
}

fuzz_target!(|input: Input<'_>| {
    let name = Mask::NAMES[usize::from(input.mask) % Mask::NAMES.len()];
    let Ok(mask) = Mask::from_name(name) else {
        return;
    };
    let caret = usize::from(input.caret);

    let edit = mask.apply(input.previous, input.raw, caret);
    assert!(edit.caret <= edit.value.chars().count(), "caret out of bounds");

    let delimiters = mask.delimiters();
    let clean = clean_cursor_index(input.raw, caret, &delimiters);
    let dirty = dirty_cursor_index(&edit.value, clean, &delimiters);
    assert!(dirty <= edit.value.chars().count());
});
