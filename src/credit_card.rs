//! Credit card number formatting as the user types.
//!
//! The brand is detected from the leading digits on every call and its block
//! pattern decides where delimiters go.
//!
//! # Format Conventions
//!
//! - **Visa/Mastercard/Discover/...**: `XXXX XXXX XXXX XXXX`
//! - **American Express / JCB15**: `XXXX XXXXXX XXXXX`
//! - **Diners Club**: `XXXX XXXXXX XXXX`
//! - **UATP**: `XXXX XXXXX XXXXXX`
//!
//! # Example
//!
//! ```
//! use input_mask::credit_card::{format_credit_card, CreditCardOptions};
//!
//! let options = CreditCardOptions::default();
//!
//! assert_eq!(format_credit_card("4111111111111111", &options), "4111 1111 1111 1111");
//! assert_eq!(format_credit_card("378282246310005", &options), "3782 822463 10005");
//!
//! // Partial input while typing
//! assert_eq!(format_credit_card("41111", &options), "4111 1");
//! ```

use zeroize::Zeroizing;

use crate::blocks::{format_blocks, max_length, Delimiter};
use crate::detect::{card_info, detect_brand_str};
use crate::strip::{head, strip_non_numeric};
use crate::CardBrand;

/// Default delimiter between card number blocks.
pub const DEFAULT_CREDIT_CARD_DELIMITER: &str = " ";

/// Options for [`format_credit_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreditCardOptions {
    /// Delimiter between blocks.
    pub delimiter: String,
    /// Accept up to 19 digits by extending the brand's pattern with a
    /// trailing block.
    pub strict_mode: bool,
    /// Show the delimiter as soon as the next block starts.
    pub lazy_show: bool,
}

impl Default for CreditCardOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_CREDIT_CARD_DELIMITER.to_string(),
            strict_mode: false,
            lazy_show: false,
        }
    }
}

/// Formats a (possibly partial, possibly already formatted) card number.
///
/// Non-digit characters are discarded, digits beyond the detected brand's
/// capacity are dropped.
///
/// # Example
///
/// ```
/// use input_mask::credit_card::{format_credit_card, CreditCardOptions};
///
/// let dashes = CreditCardOptions {
///     delimiter: "-".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(format_credit_card("4111 1111 1111 1111", &dashes), "4111-1111-1111-1111");
/// ```
pub fn format_credit_card(value: &str, options: &CreditCardOptions) -> String {
    let digits = Zeroizing::new(strip_non_numeric(value));
    let info = card_info(&digits, options.strict_mode);
    let digits = Zeroizing::new(head(&digits, max_length(&info.blocks)));

    format_blocks(
        &digits,
        &info.blocks,
        &Delimiter::Single(options.delimiter.clone()),
        options.lazy_show,
    )
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use input_mask::credit_card::unformat_credit_card;
///
/// assert_eq!(unformat_credit_card("4111 1111 1111 1111"), "4111111111111111");
/// ```
pub fn unformat_credit_card(value: &str) -> String {
    strip_non_numeric(value)
}

/// Detects the card brand of a raw or formatted value.
///
/// # Example
///
/// ```
/// use input_mask::credit_card::credit_card_type;
/// use input_mask::CardBrand;
///
/// assert_eq!(credit_card_type("4111"), CardBrand::Visa);
/// assert_eq!(credit_card_type("3782-8224"), CardBrand::Amex);
/// assert_eq!(credit_card_type(""), CardBrand::General);
/// ```
pub fn credit_card_type(value: &str) -> CardBrand {
    detect_brand_str(value)
}
