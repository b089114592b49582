//! Phone number masking with static regional block patterns.
//!
//! Only grouping is applied; numbers are not checked against any numbering
//! plan.
//!
//! # Example
//!
//! ```
//! use input_mask::phone::{format_phone, PhoneFormat, PhoneOptions, Region};
//!
//! assert_eq!(format_phone("5551234567", &PhoneOptions::default()), "555 123 4567");
//!
//! let france = PhoneOptions {
//!     region: Region::Fr,
//!     format: PhoneFormat::International,
//!     include_country_code: true,
//!     ..Default::default()
//! };
//! assert_eq!(format_phone("0123456789", &france), "+33 01 23 45 67 89");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::blocks::{format_blocks, max_length, validate_blocks, Delimiter};
use crate::error::MaskError;
use crate::strip::{head, strip_non_numeric};

/// Default delimiter between phone number groups.
pub const DEFAULT_PHONE_DELIMITER: &str = " ";

/// Regions with a built-in grouping pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Region {
    /// United States
    #[default]
    Us,
    /// United Kingdom
    Gb,
    /// France
    Fr,
    /// Germany
    De,
    /// Japan
    Jp,
    /// China
    Cn,
    /// India
    In,
    /// Brazil
    Br,
    /// Australia
    Au,
    /// Canada
    Ca,
}

impl Region {
    /// Every supported region.
    pub const ALL: [Region; 10] = [
        Self::Us,
        Self::Gb,
        Self::Fr,
        Self::De,
        Self::Jp,
        Self::Cn,
        Self::In,
        Self::Br,
        Self::Au,
        Self::Ca,
    ];

    /// Digit grouping of a national number.
    pub const fn blocks(&self) -> &'static [usize] {
        match self {
            Self::Us | Self::Ca => &[3, 3, 4],
            Self::Gb | Self::In | Self::Au => &[4, 3, 3],
            Self::Fr => &[2, 2, 2, 2, 2],
            Self::De => &[3, 2, 2, 2],
            Self::Jp | Self::Cn => &[3, 4, 4],
            Self::Br => &[2, 4, 4],
        }
    }

    /// International dialling prefix, including the `+`.
    pub const fn country_code(&self) -> &'static str {
        match self {
            Self::Us | Self::Ca => "+1",
            Self::Gb => "+44",
            Self::Fr => "+33",
            Self::De => "+49",
            Self::Jp => "+81",
            Self::Cn => "+86",
            Self::In => "+91",
            Self::Br => "+55",
            Self::Au => "+61",
        }
    }

    /// ISO 3166 alpha-2 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Gb => "GB",
            Self::Fr => "FR",
            Self::De => "DE",
            Self::Jp => "JP",
            Self::Cn => "CN",
            Self::In => "IN",
            Self::Br => "BR",
            Self::Au => "AU",
            Self::Ca => "CA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MaskError::UnknownRegion {
                input: s.to_string(),
            })
    }
}

/// National or international presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PhoneFormat {
    /// Grouped digits only.
    #[default]
    National,
    /// Grouped digits, optionally preceded by the country code.
    International,
}

impl FromStr for PhoneFormat {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "national" => Ok(Self::National),
            "international" => Ok(Self::International),
            _ => Err(MaskError::UnknownOption {
                option: "phone format",
                input: s.to_string(),
            }),
        }
    }
}

/// Options for [`format_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhoneOptions {
    /// Delimiter between groups.
    pub delimiter: String,
    /// Region providing the default pattern and country code.
    pub region: Region,
    /// Custom grouping, overriding the region's.
    pub pattern: Option<Vec<usize>>,
    /// Prefix the country code in international format.
    pub include_country_code: bool,
    /// Presentation.
    pub format: PhoneFormat,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_PHONE_DELIMITER.to_string(),
            region: Region::default(),
            pattern: None,
            include_country_code: false,
            format: PhoneFormat::default(),
        }
    }
}

impl PhoneOptions {
    /// The grouping in effect.
    pub fn blocks(&self) -> &[usize] {
        self.pattern.as_deref().unwrap_or(self.region.blocks())
    }

    /// Returns the country code prefix when it will be shown.
    pub fn country_prefix(&self) -> Option<&'static str> {
        (self.include_country_code && self.format == PhoneFormat::International)
            .then(|| self.region.country_code())
    }

    /// Checks the options for mistakes that would make formatting unreliable.
    ///
    /// # Errors
    ///
    /// Fails for an unusable custom pattern or a delimiter containing digits.
    pub fn validate(&self) -> Result<(), MaskError> {
        if let Some(pattern) = &self.pattern {
            validate_blocks(pattern)?;
        }
        if self.delimiter.chars().any(|c| c.is_ascii_digit()) {
            return Err(MaskError::DelimiterCollision {
                delimiter: self.delimiter.clone(),
            });
        }
        Ok(())
    }
}

/// Formats a phone number as it is typed.
///
/// Digits beyond the pattern are dropped. When the country code is shown, a
/// value that already starts with it has that code removed first, so
/// formatting is idempotent.
pub fn format_phone(value: &str, options: &PhoneOptions) -> String {
    let prefix = options.country_prefix();

    let national = match prefix {
        Some(code) => value.trim_start().strip_prefix(code).unwrap_or(value),
        None => value,
    };

    let blocks = options.blocks();
    let digits = head(&strip_non_numeric(national), max_length(blocks));
    let grouped = format_blocks(
        &digits,
        blocks,
        &Delimiter::Single(options.delimiter.clone()),
        true,
    );

    match prefix {
        Some(code) => format!("{} {}", code, grouped),
        None => grouped,
    }
}

/// Strips a formatted phone number back to its digits.
///
/// A country code, when present, stays in the result as digits.
pub fn unformat_phone(value: &str) -> String {
    strip_non_numeric(value)
}
