//! Fuzz target for every mask.
//!
//! Tests that formatting never panics on arbitrary input and that a
//! formatted value formats to itself.

#![no_main]

use input_mask::{
    credit_card_type, format_credit_card, strip_delimiters, CreditCardOptions, GeneralOptions,
    Mask,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    for name in Mask::NAMES {
        if let Ok(mask) = Mask::from_name(name) {
            let formatted = mask.format(data);
            let _ = mask.unformat(data);
            let _ = mask.unformat(&formatted);
        }
    }
    let _ = credit_card_type(data);
    let _ = strip_delimiters(data, &[" ", "-", ""]);

    let strict = CreditCardOptions {
        strict_mode: true,
        lazy_show: true,
        ..Default::default()
    };
    let _ = format_credit_card(data, &strict);

    // Idempotence on masks with content-preserving options
    let masks = [
        Mask::from(CreditCardOptions::default()),
        Mask::from(GeneralOptions {
            delimiter: "-".into(),
            ..GeneralOptions::new(vec![2, 3, 4])
        }),
    ];
    for mask in &masks {
        let once = mask.format(data);
        assert_eq!(mask.format(&once), once, "formatting should be idempotent");
    }
});
