//! Numeral masking: grouped integers with an optional decimal part.
//!
//! # Example
//!
//! ```
//! use input_mask::numeral::{format_numeral, GroupStyle, NumeralOptions};
//!
//! let options = NumeralOptions::default();
//! assert_eq!(format_numeral("1234.5", &options), "1,234.5");
//! assert_eq!(format_numeral("1234.567", &options), "1,234.56");
//!
//! let lakh = NumeralOptions {
//!     group_style: GroupStyle::Lakh,
//!     ..Default::default()
//! };
//! assert_eq!(format_numeral("1234567", &lakh), "12,34,567");
//! ```

use std::str::FromStr;

use crate::error::MaskError;
use crate::strip::strip_prefix;

/// Default thousands delimiter.
pub const DEFAULT_NUMERAL_DELIMITER: &str = ",";

/// Default decimal mark.
pub const DEFAULT_DECIMAL_MARK: &str = ".";

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupStyle {
    /// Groups of three: `1,234,567`.
    #[default]
    Thousand,
    /// Indian grouping, three then twos: `12,34,567`.
    Lakh,
    /// Groups of four: `123,4567`.
    Wan,
    /// No grouping.
    None,
}

impl GroupStyle {
    /// Returns true if a delimiter goes after a digit followed by
    /// `remaining` more integer digits.
    #[inline]
    fn splits_before(&self, remaining: usize) -> bool {
        match self {
            Self::Thousand => remaining > 0 && remaining % 3 == 0,
            Self::Lakh => remaining >= 3 && remaining % 2 == 1,
            Self::Wan => remaining > 0 && remaining % 4 == 0,
            Self::None => false,
        }
    }
}

impl FromStr for GroupStyle {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thousand" => Ok(Self::Thousand),
            "lakh" => Ok(Self::Lakh),
            "wan" => Ok(Self::Wan),
            "none" => Ok(Self::None),
            _ => Err(MaskError::UnknownOption {
                option: "group style",
                input: s.to_string(),
            }),
        }
    }
}

/// Options for [`format_numeral`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumeralOptions {
    /// Group delimiter.
    pub delimiter: String,
    /// Separator between integer and decimal parts.
    pub decimal_mark: String,
    /// Maximum integer digits; `0` means unlimited.
    pub integer_scale: usize,
    /// Maximum decimal digits; `0` drops the decimal part entirely.
    pub decimal_scale: usize,
    /// Integer grouping.
    pub group_style: GroupStyle,
    /// Drop leading zeros from the integer part.
    pub strip_leading_zeroes: bool,
    /// Discard the minus sign.
    pub positive_only: bool,
    /// Text shown before (or after, see `tail_prefix`) the number.
    pub prefix: String,
    /// Put the prefix after the number.
    pub tail_prefix: bool,
    /// Put the sign before the prefix (`-$1` rather than `$-1`).
    pub sign_before_prefix: bool,
}

impl Default for NumeralOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_NUMERAL_DELIMITER.to_string(),
            decimal_mark: DEFAULT_DECIMAL_MARK.to_string(),
            integer_scale: 0,
            decimal_scale: 2,
            group_style: GroupStyle::Thousand,
            strip_leading_zeroes: true,
            positive_only: false,
            prefix: String::new(),
            tail_prefix: false,
            sign_before_prefix: false,
        }
    }
}

impl NumeralOptions {
    /// Checks the options for mistakes that would make formatting unreliable.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::DelimiterCollision`] when the group delimiter
    /// equals the decimal mark, or when either contains a digit.
    pub fn validate(&self) -> Result<(), MaskError> {
        let has_digit = |s: &str| s.chars().any(|c| c.is_ascii_digit());

        if has_digit(&self.delimiter)
            || (!self.delimiter.is_empty() && self.delimiter == self.decimal_mark)
        {
            return Err(MaskError::DelimiterCollision {
                delimiter: self.delimiter.clone(),
            });
        }
        if has_digit(&self.decimal_mark) {
            return Err(MaskError::DelimiterCollision {
                delimiter: self.decimal_mark.clone(),
            });
        }
        Ok(())
    }
}

/// Removes the configured prefix (or suffix) from a previously formatted value.
fn remove_prefix(value: &str, options: &NumeralOptions) -> String {
    let prefix = options.prefix.as_str();
    if prefix.is_empty() {
        return value.to_string();
    }

    if options.tail_prefix {
        return value.strip_suffix(prefix).unwrap_or(value).to_string();
    }

    match value.strip_prefix('-') {
        Some(rest) if options.sign_before_prefix => format!("-{}", strip_prefix(rest, prefix)),
        _ => strip_prefix(value, prefix),
    }
}

/// Splits at the first decimal mark.
fn split_decimal<'a>(value: &'a str, mark: &str) -> (&'a str, Option<&'a str>) {
    if mark.is_empty() {
        return (value, None);
    }
    match value.find(mark) {
        Some(i) => (&value[..i], Some(&value[i + mark.len()..])),
        None => (value, None),
    }
}

fn group(digits: &str, delimiter: &str, style: GroupStyle) -> String {
    let count = digits.len();
    let mut result = String::with_capacity(count + count / 2 * delimiter.len());

    for (i, digit) in digits.chars().enumerate() {
        result.push(digit);
        if style.splits_before(count - 1 - i) {
            result.push_str(delimiter);
        }
    }

    result
}

/// Formats a number as it is typed.
///
/// Only a leading `-` is treated as a sign, and only the first decimal mark
/// splits integer from decimal digits. Every other non-digit is discarded.
/// An empty number yields the prefix alone.
///
/// # Example
///
/// ```
/// use input_mask::numeral::{format_numeral, NumeralOptions};
///
/// let dollars = NumeralOptions {
///     prefix: "$".to_string(),
///     sign_before_prefix: true,
///     ..Default::default()
/// };
/// assert_eq!(format_numeral("-1234", &dollars), "-$1,234");
/// ```
pub fn format_numeral(value: &str, options: &NumeralOptions) -> String {
    let body = remove_prefix(value, options);
    let (integer_raw, decimal_raw) = split_decimal(&body, &options.decimal_mark);

    let negative = integer_raw
        .chars()
        .find(|&c| c.is_ascii_digit() || c == '-')
        .is_some_and(|c| c == '-');
    let sign = if negative && !options.positive_only { "-" } else { "" };

    let mut integer: String = integer_raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if options.strip_leading_zeroes {
        let trimmed = integer.trim_start_matches('0');
        integer = if trimmed.is_empty() && !integer.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }
    if options.integer_scale > 0 && integer.len() > options.integer_scale {
        tracing::trace!(scale = options.integer_scale, "truncated integer digits");
        integer.truncate(options.integer_scale);
    }

    let decimal = match decimal_raw {
        Some(raw) if options.decimal_scale > 0 => {
            let digits: String = raw
                .chars()
                .filter(|c| c.is_ascii_digit())
                .take(options.decimal_scale)
                .collect();
            format!("{}{}", options.decimal_mark, digits)
        }
        _ => String::new(),
    };

    let integer = group(&integer, &options.delimiter, options.group_style);
    let prefix = options.prefix.as_str();

    if options.tail_prefix {
        format!("{}{}{}{}", sign, integer, decimal, prefix)
    } else if options.sign_before_prefix {
        format!("{}{}{}{}", sign, prefix, integer, decimal)
    } else {
        format!("{}{}{}{}", prefix, sign, integer, decimal)
    }
}

/// Reduces a formatted number to a plain machine-readable string.
///
/// The prefix and group delimiters are removed, the decimal mark becomes `.`
/// and a minus sign is kept.
///
/// # Example
///
/// ```
/// use input_mask::numeral::{unformat_numeral, NumeralOptions};
///
/// let euro = NumeralOptions {
///     delimiter: ".".to_string(),
///     decimal_mark: ",".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(unformat_numeral("1.234,56", &euro), "1234.56");
/// ```
pub fn unformat_numeral(value: &str, options: &NumeralOptions) -> String {
    let body = remove_prefix(value, options);
    let (integer, decimal) = split_decimal(&body, &options.decimal_mark);

    let keep = |c: &char| c.is_ascii_digit() || *c == '-';
    let mut result: String = integer.chars().filter(keep).collect();
    if let Some(decimal) = decimal {
        result.push('.');
        result.extend(decimal.chars().filter(keep));
    }
    result
}
