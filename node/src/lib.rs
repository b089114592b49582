//! Node.js bindings for input_mask.
//!
//! This crate provides native Node.js bindings using napi-rs.
//!
//! # Installation
//!
//! ```bash
//! npm install input-mask
//! ```
//!
//! # Usage
//!
//! ```javascript
//! const { format, apply, creditCardType } = require('input-mask');
//!
//! // Format a value with a named mask
//! format("date", "31122023");                           // "31-12-2023"
//! format("numeral", "1234.5", '{"prefix": "$"}');       // "$1,234.5"
//!
//! // Reformat after an edit and place the caret
//! const edit = apply("credit-card", "411", "4111", 4);
//! console.log(edit.value, edit.caret);                  // "4111 " 5
//!
//! creditCardType("3782");                               // "amex"
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use input_mask::{
    credit_card_type as detect_type, cursor::CursorTracker, format_credit_card as format_card,
    CreditCardOptions, CursorTrackerOptions, Mask, MaskError,
};

fn to_napi(error: MaskError) -> Error {
    Error::new(Status::InvalidArg, error.to_string())
}

fn build_mask(name: &str, options: Option<String>) -> Result<Mask> {
    match options.as_deref().map(str::trim) {
        None | Some("") => {
            let mask = Mask::from_name(name).map_err(to_napi)?;
            mask.validate().map_err(to_napi)?;
            Ok(mask)
        }
        Some(json) => Mask::from_json(name, json).map_err(to_napi),
    }
}

/// A formatted value and the caret offset to show with it.
#[napi(object)]
pub struct EditResult {
    pub value: String,
    pub caret: u32,
}

/// Brand detected for a (partial) card number.
#[napi(object)]
pub struct CardTypeResult {
    pub brand: String,
    pub name: String,
    pub blocks: Vec<u32>,
}

/// Formats a value with a named mask.
///
/// Supported masks: credit-card, date, time, numeral, phone, general
///
/// @param mask - Mask name
/// @param value - Raw or already formatted value
/// @param options - Optional JSON options object
/// @returns Formatted value
#[napi]
pub fn format(mask: String, value: String, options: Option<String>) -> Result<String> {
    Ok(build_mask(&mask, options)?.format(&value))
}

/// Removes the formatting of a named mask.
///
/// @param mask - Mask name
/// @param value - Formatted value
/// @param options - Optional JSON options object
/// @returns Unformatted value
#[napi]
pub fn unformat(mask: String, value: String, options: Option<String>) -> Result<String> {
    Ok(build_mask(&mask, options)?.unformat(&value))
}

/// Reformats an edited value and computes the caret.
///
/// @param mask - Mask name
/// @param previous - Value shown before the edit
/// @param raw - Value right after the edit
/// @param caret - Caret offset in the raw value
/// @param options - Optional JSON options object
/// @returns EditResult
#[napi]
pub fn apply(
    mask: String,
    previous: String,
    raw: String,
    caret: u32,
    options: Option<String>,
) -> Result<EditResult> {
    let edit = build_mask(&mask, options)?.apply(&previous, &raw, caret as usize);
    Ok(EditResult {
        value: edit.value,
        caret: edit.caret as u32,
    })
}

/// Formats a card number with spaces.
///
/// @param cardNumber - Raw card number
/// @returns Formatted card number
#[napi]
pub fn format_credit_card(card_number: String) -> String {
    format_card(&card_number, &CreditCardOptions::default())
}

/// Formats a card number with a custom delimiter.
///
/// @param cardNumber - Raw card number
/// @param delimiter - Delimiter between groups
/// @returns Formatted card number
#[napi]
pub fn format_credit_card_with_delimiter(card_number: String, delimiter: String) -> String {
    let options = CreditCardOptions {
        delimiter,
        ..Default::default()
    };
    format_card(&card_number, &options)
}

/// Detects the card brand from a (partial) card number.
///
/// @param cardNumber - The card number or prefix
/// @returns Brand tag ("general" when nothing matches)
#[napi]
pub fn credit_card_type(card_number: String) -> String {
    detect_type(&card_number).tag().to_string()
}

/// Detects the card brand and its digit grouping.
///
/// @param cardNumber - The card number or prefix
/// @returns CardTypeResult
#[napi]
pub fn credit_card_info(card_number: String) -> CardTypeResult {
    let brand = detect_type(&card_number);
    CardTypeResult {
        brand: brand.tag().to_string(),
        name: brand.name().to_string(),
        blocks: brand.blocks().iter().map(|&b| b as u32).collect(),
    }
}

/// Computes the caret offset after a reformat.
///
/// @param previous - Value shown before the edit
/// @param raw - Value right after the edit
/// @param caret - Caret offset in the raw value
/// @param next - Reformatted value
/// @param delimiters - Strings the formatter inserts
/// @param prefix - Fixed text in front of the content
/// @returns New caret offset
#[napi]
pub fn track_cursor(
    previous: String,
    raw: String,
    caret: u32,
    next: String,
    delimiters: Vec<String>,
    prefix: Option<String>,
) -> u32 {
    let options = CursorTrackerOptions::with_delimiters(&delimiters).prefix(prefix.unwrap_or_default());
    CursorTracker::new(options).track(&previous, &raw, caret as usize, &next) as u32
}

/// Lists the supported mask names.
///
/// @returns Mask names
#[napi]
pub fn mask_names() -> Vec<String> {
    Mask::NAMES.iter().map(|name| name.to_string()).collect()
}
