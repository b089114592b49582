//! WebAssembly bindings for input masking.
//!
//! This module exposes the formatters and the cursor tracker to JavaScript,
//! where the live input elements are.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { InputMask, format_credit_card, credit_card_type } from 'input_mask';
//!
//! await init();
//!
//! const mask = new InputMask("date", '{"delimiter": "/", "pattern": "mdY"}');
//!
//! input.addEventListener("input", () => {
//!     const edit = mask.apply(previous, input.value, input.selectionEnd);
//!     input.value = edit.value;
//!     input.setSelectionRange(edit.caret, edit.caret);
//!     previous = edit.value;
//! });
//!
//! credit_card_type("4111");  // "visa"
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::cursor::{CursorTracker, CursorTrackerOptions};
use crate::error::MaskError;
use crate::Mask;

fn to_js(error: MaskError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Builds a mask from its name and an optional JSON options object.
fn build_mask(name: &str, options: Option<String>) -> Result<Mask, JsValue> {
    match options.as_deref().map(str::trim) {
        None | Some("") => {
            let mask = Mask::from_name(name).map_err(to_js)?;
            mask.validate().map_err(to_js)?;
            Ok(mask)
        }
        Some(json) => Mask::from_json(name, json).map_err(to_js),
    }
}

/// A formatted value and its caret, returned to JavaScript.
#[wasm_bindgen]
pub struct EditResult {
    value: String,
    caret: usize,
}

#[wasm_bindgen]
impl EditResult {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn caret(&self) -> usize {
        self.caret
    }
}

/// A configured mask.
#[wasm_bindgen]
pub struct InputMask {
    mask: Mask,
}

#[wasm_bindgen]
impl InputMask {
    /// Creates a mask from its name (`"credit-card"`, `"date"`, `"time"`,
    /// `"numeral"`, `"phone"`, `"general"`) and optional JSON options.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str, options: Option<String>) -> Result<InputMask, JsValue> {
        Ok(Self {
            mask: build_mask(name, options)?,
        })
    }

    /// Formats a raw value.
    pub fn format(&self, value: &str) -> String {
        self.mask.format(value)
    }

    /// Removes the formatting from a value.
    pub fn unformat(&self, value: &str) -> String {
        self.mask.unformat(value)
    }

    /// Formats an edited value and places the caret.
    pub fn apply(&self, previous: &str, raw: &str, caret: usize) -> EditResult {
        let edit = self.mask.apply(previous, raw, caret);
        EditResult {
            value: edit.value,
            caret: edit.caret,
        }
    }

    /// The delimiters the mask inserts.
    pub fn delimiters(&self) -> js_sys::Array {
        self.mask
            .delimiters()
            .iter()
            .map(|d| JsValue::from_str(d))
            .collect()
    }
}

/// Formats a value with a named mask.
///
/// # Example
/// ```javascript
/// format("numeral", "1234.5")  // "1,234.5"
/// ```
#[wasm_bindgen]
pub fn format(name: &str, value: &str, options: Option<String>) -> Result<String, JsValue> {
    Ok(build_mask(name, options)?.format(value))
}

/// Removes the formatting of a named mask from a value.
#[wasm_bindgen]
pub fn unformat(name: &str, value: &str, options: Option<String>) -> Result<String, JsValue> {
    Ok(build_mask(name, options)?.unformat(value))
}

/// Formats a card number with spaces.
///
/// # Example
/// ```javascript
/// format_credit_card("4111111111111111")  // "4111 1111 1111 1111"
/// ```
#[wasm_bindgen]
pub fn format_credit_card(value: &str) -> String {
    crate::credit_card::format_credit_card(value, &Default::default())
}

/// Detects the card brand tag of a (partial) card number.
///
/// # Example
/// ```javascript
/// credit_card_type("34")  // "amex"
/// ```
#[wasm_bindgen]
pub fn credit_card_type(value: &str) -> String {
    crate::credit_card::credit_card_type(value).tag().to_string()
}

/// Computes the caret offset after reformatting.
#[wasm_bindgen]
pub fn track_cursor(
    previous: &str,
    raw: &str,
    caret: usize,
    next: &str,
    delimiters: js_sys::Array,
    prefix: Option<String>,
) -> usize {
    let delimiters: Vec<String> = delimiters.iter().filter_map(|d| d.as_string()).collect();
    let options = CursorTrackerOptions::with_delimiters(&delimiters).prefix(prefix.unwrap_or_default());

    CursorTracker::new(options).track(previous, raw, caret, next)
}
