//! # input_mask
//!
//! Input masking for Rust: formats credit card numbers, dates, times,
//! numerals, phone numbers and free-form blocks while the user types, and keeps
//! the caret in place as delimiters come and go.
//!
//! ## Features
//!
//! - Block formatting with eager or lazy delimiters
//! - Credit card brand detection (13 brands) with per-brand grouping
//! - Date and time clamping with configurable unit order and date ranges
//! - Numeral grouping (thousand, lakh, wan), decimal scale, sign and prefix
//! - Regional phone grouping with optional country code
//! - Cursor tracking that works with any text element
//! - Multiple interfaces: library, CLI, WASM, Node.js
//!
//! ## Quick Start
//!
//! ```rust
//! use input_mask::{format_credit_card, credit_card_type, CardBrand, CreditCardOptions};
//!
//! let options = CreditCardOptions::default();
//! assert_eq!(format_credit_card("4111111111111111", &options), "4111 1111 1111 1111");
//! assert_eq!(credit_card_type("4111"), CardBrand::Visa);
//!
//! // partial input
//! assert_eq!(format_credit_card("41111", &options), "4111 1");
//! ```
//!
//! ## Dates
//!
//! ```rust
//! use input_mask::{format_date, DateOptions};
//!
//! let options = DateOptions::default(); // dd-mm-YYYY
//!
//! assert_eq!(format_date("311220", &options), "31-12-20");
//! assert_eq!(format_date("31122023", &options), "31-12-2023");
//!
//! // an impossible leading digit is padded
//! assert_eq!(format_date("4", &options), "04-");
//! ```
//!
//! ## Times
//!
//! ```rust
//! use input_mask::{format_time, TimeOptions};
//!
//! let options = TimeOptions::default(); // hh:mm:ss, 24 hour
//! assert_eq!(format_time("9", &options), "09:");
//! assert_eq!(format_time("2359", &options), "23:59:");
//! ```
//!
//! ## Numerals
//!
//! ```rust
//! use input_mask::{format_numeral, unformat_numeral, NumeralOptions};
//!
//! let options = NumeralOptions::default();
//! assert_eq!(format_numeral("1234.567", &options), "1,234.56");
//! assert_eq!(unformat_numeral("1,234.56", &options), "1234.56");
//! ```
//!
//! ## Cursor Tracking
//!
//! ```rust
//! use input_mask::Mask;
//!
//! let mask: Mask = "credit-card".parse().unwrap();
//!
//! // "4111" typed, the formatter appends a space and the caret follows it
//! let edit = mask.apply("411", "4111", 4);
//! assert_eq!(edit.value, "4111 ");
//! assert_eq!(edit.caret, 5);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for every options type |
//! | `json` | `Mask::from_json` (implies `serde`) |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Errors
//!
//! Formatting never fails. Only configuration is checked, through the
//! `validate` methods and the `FromStr` impls, which return [`MaskError`].
//! A mask with bad options still formats, usually to an empty string, so
//! validate it once or go through [`Mask::try_format`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod blocks;
pub mod card;
pub mod credit_card;
pub mod cursor;
pub mod date;
pub mod detect;
pub mod error;
pub mod general;
pub mod mask;
pub mod numeral;
pub mod phone;
pub mod stream;
pub mod strip;
pub mod time;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use blocks::{format_blocks, Delimiter};
pub use card::{CardBrand, MAX_CARD_DIGITS};
pub use credit_card::{credit_card_type, format_credit_card, unformat_credit_card, CreditCardOptions};
pub use cursor::{register_cursor_tracker, CursorTracker, CursorTrackerOptions, Registration, TextInput};
pub use date::{format_date, unformat_date, DateBound, DateOptions, DatePattern};
pub use detect::detect_brand;
pub use error::MaskError;
pub use general::{format_general, unformat_general, GeneralOptions};
pub use mask::{Edit, Mask};
pub use numeral::{format_numeral, unformat_numeral, GroupStyle, NumeralOptions};
pub use phone::{format_phone, unformat_phone, PhoneFormat, PhoneOptions, Region};
pub use strip::strip_delimiters;
pub use time::{format_time, unformat_time, TimeFormat, TimeOptions, TimePattern};
