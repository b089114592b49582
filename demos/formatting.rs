//! Formatting example for every mask.
//!
//! Run with: `cargo run --example formatting`

use input_mask::{
    credit_card_type, format_credit_card, format_date, format_general, format_numeral,
    format_phone, format_time, unformat_credit_card, CreditCardOptions, DateOptions,
    GeneralOptions, GroupStyle, NumeralOptions, PhoneFormat, PhoneOptions, Region, TimeFormat,
    TimeOptions,
};

fn main() {
    println!("=== Input Masking ===\n");

    // -------------------------------------------------------------------------
    // Card numbers, grouped by detected brand
    // -------------------------------------------------------------------------
    println!("--- Card Numbers (brand-aware) ---\n");

    let options = CreditCardOptions::default();
    let cards = [
        "4111111111111111",
        "5500000000000004",
        "378282246310005",
        "6011111111111117",
        "30569309025904",
    ];

    for number in cards {
        let brand = credit_card_type(number);
        println!("  {} {:?}", brand, brand.blocks());
        println!("    Input:  {}", number);
        println!("    Output: {}", format_credit_card(number, &options));
        println!();
    }

    println!("  Simulating typing an Amex card:");
    let amex = "378282246310005";
    for end in 1..=amex.len() {
        println!("    {:<15} -> {}", &amex[..end], format_credit_card(&amex[..end], &options));
    }
    println!();

    let formatted = format_credit_card(amex, &options);
    println!("  Round trip: {} -> {}\n", formatted, unformat_credit_card(&formatted));

    // -------------------------------------------------------------------------
    // Dates
    // -------------------------------------------------------------------------
    println!("--- Dates ---\n");

    let dmy = DateOptions::default();
    for input in ["4", "31", "3102", "31022023", "31022024"] {
        println!("  {:<10} -> {}", input, format_date(input, &dmy));
    }

    let us = DateOptions {
        delimiter: "/".to_string(),
        pattern: "mdY".parse().unwrap(),
        ..Default::default()
    };
    println!("  {:<10} -> {} (mdY)", "12312023", format_date("12312023", &us));

    let bounded = DateOptions {
        min: Some("2000-01-01".parse().unwrap()),
        max: Some("2020-12-31".parse().unwrap()),
        ..Default::default()
    };
    println!("  {:<10} -> {} (2000..=2020)", "01012030", format_date("01012030", &bounded));
    println!();

    // -------------------------------------------------------------------------
    // Times
    // -------------------------------------------------------------------------
    println!("--- Times ---\n");

    let clock = TimeOptions::default();
    for input in ["9", "25", "2360", "235959"] {
        println!("  {:<8} -> {}", input, format_time(input, &clock));
    }

    let twelve = TimeOptions {
        format: TimeFormat::TwelveHour,
        ..Default::default()
    };
    println!("  {:<8} -> {} (12h)", "1345", format_time("1345", &twelve));
    println!();

    // -------------------------------------------------------------------------
    // Numerals
    // -------------------------------------------------------------------------
    println!("--- Numerals ---\n");

    for style in [GroupStyle::Thousand, GroupStyle::Lakh, GroupStyle::Wan, GroupStyle::None] {
        let options = NumeralOptions {
            group_style: style,
            ..Default::default()
        };
        println!("  {:<10} {}", format!("{:?}", style), format_numeral("123456789.987", &options));
    }

    let euro = NumeralOptions {
        delimiter: ".".to_string(),
        decimal_mark: ",".to_string(),
        prefix: " €".to_string(),
        tail_prefix: true,
        ..Default::default()
    };
    println!("  {:<10} {}", "euro", format_numeral("-1234567,891", &euro));
    println!();

    // -------------------------------------------------------------------------
    // Phone numbers
    // -------------------------------------------------------------------------
    println!("--- Phone Numbers ---\n");

    for region in Region::ALL {
        let options = PhoneOptions {
            region,
            include_country_code: true,
            format: PhoneFormat::International,
            ..Default::default()
        };
        println!("  {} {}", region, format_phone("0123456789012", &options));
    }
    println!();

    // -------------------------------------------------------------------------
    // Free-form blocks
    // -------------------------------------------------------------------------
    println!("--- Free-form Blocks ---\n");

    let cpf = GeneralOptions {
        delimiter: (&[".", ".", "-"][..]).into(),
        numeric_only: true,
        ..GeneralOptions::new(vec![3, 3, 3, 2])
    };
    println!("  CPF:     {}", format_general("12345678901", &cpf));

    let licence = GeneralOptions {
        delimiter: "-".into(),
        uppercase: true,
        ..GeneralOptions::new(vec![5, 5, 5, 5])
    };
    println!("  Licence: {}", format_general("abcde12345fghij67890", &licence));
}
