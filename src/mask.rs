//! One entry point for every kind of mask.
//!
//! [`Mask`] pairs a domain with its options, so callers that pick the domain
//! at run time (a form builder, the CLI, the JavaScript bindings) can format,
//! unformat and track the caret without matching on the domain themselves.
//!
//! # Example
//!
//! ```
//! use input_mask::{Mask, date::DateOptions};
//!
//! let mask = Mask::Date(DateOptions::default());
//!
//! assert_eq!(mask.format("31122023"), "31-12-2023");
//! assert_eq!(mask.unformat("31-12-2023"), "31122023");
//!
//! // the user typed "2" after "1" and the formatter added a delimiter
//! let edit = mask.apply("1", "12", 2);
//! assert_eq!(edit.value, "12-");
//! assert_eq!(edit.caret, 3);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::credit_card::{format_credit_card, unformat_credit_card, CreditCardOptions};
use crate::cursor::{CursorTracker, CursorTrackerOptions};
use crate::date::{format_date, unformat_date, DateOptions};
use crate::error::MaskError;
use crate::general::{format_general, unformat_general, GeneralOptions};
use crate::numeral::{format_numeral, unformat_numeral, NumeralOptions};
use crate::phone::{format_phone, unformat_phone, PhoneOptions};
use crate::time::{format_time, unformat_time, TimeOptions};

/// A masking domain together with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mask", content = "options", rename_all = "kebab-case")
)]
pub enum Mask {
    /// Card numbers grouped by detected brand.
    CreditCard(CreditCardOptions),
    /// Calendar dates.
    Date(DateOptions),
    /// Clock times.
    Time(TimeOptions),
    /// Grouped decimal numbers.
    Numeral(NumeralOptions),
    /// Phone numbers.
    Phone(PhoneOptions),
    /// Free-form blocks.
    General(GeneralOptions),
}

/// Result of applying a mask to one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The reformatted value.
    pub value: String,
    /// Where the caret goes in `value`.
    pub caret: usize,
}

impl Mask {
    /// Every mask name accepted by [`Mask::from_name`].
    pub const NAMES: [&'static str; 6] = ["credit-card", "date", "time", "numeral", "phone", "general"];

    /// Builds a mask with default options from its name.
    ///
    /// The general mask has no default blocks, so it is returned empty and
    /// fails [`Mask::validate`] until blocks are set.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::UnknownMask`] for an unrecognized name.
    pub fn from_name(name: &str) -> Result<Self, MaskError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "credit-card" | "creditcard" | "card" => Ok(Self::CreditCard(CreditCardOptions::default())),
            "date" => Ok(Self::Date(DateOptions::default())),
            "time" => Ok(Self::Time(TimeOptions::default())),
            "numeral" | "number" => Ok(Self::Numeral(NumeralOptions::default())),
            "phone" => Ok(Self::Phone(PhoneOptions::default())),
            "general" => Ok(Self::General(GeneralOptions::default())),
            _ => Err(MaskError::UnknownMask {
                input: name.to_string(),
            }),
        }
    }

    /// Builds a mask from its name and a JSON object of options.
    ///
    /// Missing keys keep their defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::UnknownMask`] for an unrecognized name,
    /// [`MaskError::InvalidOptions`] when the JSON does not decode, or the
    /// validation error of the decoded options.
    ///
    /// # Example
    ///
    /// ```
    /// use input_mask::Mask;
    ///
    /// let mask = Mask::from_json("date", r#"{"delimiter": "/", "pattern": "mdY"}"#).unwrap();
    /// assert_eq!(mask.format("12312023"), "12/31/2023");
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(name: &str, options: &str) -> Result<Self, MaskError> {
        let invalid = |e: serde_json::Error| MaskError::InvalidOptions {
            message: e.to_string(),
        };

        let options: serde_json::Value = serde_json::from_str(options).map_err(invalid)?;
        let tagged = serde_json::json!({
            "mask": Self::from_name(name)?.name(),
            "options": options,
        });
        let mask: Self = serde_json::from_value(tagged).map_err(invalid)?;
        mask.validate()?;

        tracing::debug!(mask = mask.name(), "mask built from JSON options");
        Ok(mask)
    }

    /// The mask's canonical name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreditCard(_) => "credit-card",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Numeral(_) => "numeral",
            Self::Phone(_) => "phone",
            Self::General(_) => "general",
        }
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found.
    pub fn validate(&self) -> Result<(), MaskError> {
        match self {
            Self::CreditCard(options) => {
                if options.delimiter.chars().any(|c| c.is_ascii_digit()) {
                    return Err(MaskError::DelimiterCollision {
                        delimiter: options.delimiter.clone(),
                    });
                }
                Ok(())
            }
            Self::Date(options) => options.validate(),
            Self::Time(options) => options.validate(),
            Self::Numeral(options) => options.validate(),
            Self::Phone(options) => options.validate(),
            Self::General(options) => options.validate(),
        }
    }

    /// Formats a raw value.
    ///
    /// The options are not checked here: a misconfigured mask, such as a
    /// general mask without blocks, formats everything to an empty string.
    /// Call [`Mask::validate`] once up front or use [`Mask::try_format`].
    pub fn format(&self, value: &str) -> String {
        match self {
            Self::CreditCard(options) => format_credit_card(value, options),
            Self::Date(options) => format_date(value, options),
            Self::Time(options) => format_time(value, options),
            Self::Numeral(options) => format_numeral(value, options),
            Self::Phone(options) => format_phone(value, options),
            Self::General(options) => format_general(value, options),
        }
    }

    /// Checks the options, then formats a raw value.
    ///
    /// # Errors
    ///
    /// Returns the configuration problem [`Mask::validate`] reports.
    ///
    /// # Example
    ///
    /// ```
    /// use input_mask::{GeneralOptions, Mask, MaskError};
    ///
    /// let mask = Mask::from(GeneralOptions::new(vec![2, 2]));
    /// assert_eq!(mask.try_format("12345"), Ok("1234".to_string()));
    ///
    /// let empty = Mask::from(GeneralOptions::default());
    /// assert_eq!(empty.try_format("1234"), Err(MaskError::EmptyBlocks));
    /// ```
    pub fn try_format(&self, value: &str) -> Result<String, MaskError> {
        self.validate()?;
        Ok(self.format(value))
    }

    /// Removes the formatting from a value.
    pub fn unformat(&self, value: &str) -> String {
        match self {
            Self::CreditCard(_) => unformat_credit_card(value),
            Self::Date(_) => unformat_date(value),
            Self::Time(_) => unformat_time(value),
            Self::Numeral(options) => unformat_numeral(value, options),
            Self::Phone(_) => unformat_phone(value),
            Self::General(options) => unformat_general(value, options),
        }
    }

    /// The strings the formatter inserts between blocks.
    pub fn delimiters(&self) -> Vec<String> {
        match self {
            Self::CreditCard(options) => vec![options.delimiter.clone()],
            Self::Date(options) => vec![options.delimiter.clone()],
            Self::Time(options) => vec![options.delimiter.clone()],
            Self::Numeral(options) => vec![options.delimiter.clone()],
            Self::Phone(options) => vec![options.delimiter.clone()],
            Self::General(options) => options.delimiter.all().into_iter().map(String::from).collect(),
        }
    }

    /// Fixed text the formatter puts in front of the content, if any.
    pub fn prefix(&self) -> String {
        match self {
            Self::Numeral(options) if !options.tail_prefix && !options.sign_before_prefix => {
                options.prefix.clone()
            }
            Self::Phone(options) => options
                .country_prefix()
                .map(|code| format!("{} ", code))
                .unwrap_or_default(),
            Self::General(options) => options.prefix.clone(),
            _ => String::new(),
        }
    }

    /// A cursor tracker configured for this mask.
    pub fn cursor_tracker(&self) -> CursorTracker {
        CursorTracker::new(CursorTrackerOptions::with_delimiters(&self.delimiters()).prefix(self.prefix()))
    }

    /// Formats an edited value and places the caret.
    ///
    /// `previous` is the value shown before the edit, `raw` the value right
    /// after it and `caret` the caret offset in `raw`.
    pub fn apply(&self, previous: &str, raw: &str, caret: usize) -> Edit {
        let value = self.format(raw);
        let caret = self.cursor_tracker().track(previous, raw, caret, &value);
        Edit { value, caret }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<CreditCardOptions> for Mask {
    fn from(options: CreditCardOptions) -> Self {
        Self::CreditCard(options)
    }
}

impl From<DateOptions> for Mask {
    fn from(options: DateOptions) -> Self {
        Self::Date(options)
    }
}

impl From<TimeOptions> for Mask {
    fn from(options: TimeOptions) -> Self {
        Self::Time(options)
    }
}

impl From<NumeralOptions> for Mask {
    fn from(options: NumeralOptions) -> Self {
        Self::Numeral(options)
    }
}

impl From<PhoneOptions> for Mask {
    fn from(options: PhoneOptions) -> Self {
        Self::Phone(options)
    }
}

impl From<GeneralOptions> for Mask {
    fn from(options: GeneralOptions) -> Self {
        Self::General(options)
    }
}
