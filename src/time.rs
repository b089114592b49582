//! Time masking.
//!
//! Hours, minutes and seconds are clamped one unit at a time; there is no
//! whole-value correction.
//!
//! ```
//! use input_mask::time::{format_time, TimeOptions};
//!
//! let options = TimeOptions::default(); // hh:mm:ss, 24 hour
//!
//! assert_eq!(format_time("9", &options), "09:");
//! assert_eq!(format_time("25", &options), "23:");
//! assert_eq!(format_time("235959", &options), "23:59:59");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::blocks::{format_blocks, max_length, Delimiter};
use crate::date::clamp_unit;
use crate::error::MaskError;
use crate::strip::{head, strip_non_numeric};

/// Default delimiter between time blocks.
pub const DEFAULT_TIME_DELIMITER: &str = ":";

/// One semantic unit of a time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Hour (`h`).
    Hour,
    /// Minute (`m`).
    Minute,
    /// Second (`s`).
    Second,
}

impl TimeUnit {
    /// The single-character tag of the unit.
    #[inline]
    pub const fn tag(&self) -> char {
        match self {
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }

    /// Parses a unit tag.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::UnknownUnit`] for anything but `h`, `m`, `s`.
    pub fn from_tag(tag: char) -> Result<Self, MaskError> {
        match tag {
            'h' => Ok(Self::Hour),
            'm' => Ok(Self::Minute),
            's' => Ok(Self::Second),
            unit => Err(MaskError::UnknownUnit { unit }),
        }
    }
}

/// Ordered time units, each appearing at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TimePattern {
    units: Vec<TimeUnit>,
}

impl TimePattern {
    /// Builds a pattern from units.
    ///
    /// # Errors
    ///
    /// Fails for an empty pattern or a repeated unit.
    pub fn new(units: &[TimeUnit]) -> Result<Self, MaskError> {
        if units.is_empty() {
            return Err(MaskError::EmptyPattern);
        }
        for (i, unit) in units.iter().enumerate() {
            if units[..i].contains(unit) {
                return Err(MaskError::DuplicateUnit { unit: unit.tag() });
            }
        }
        Ok(Self {
            units: units.to_vec(),
        })
    }

    /// The units in display order.
    #[inline]
    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    /// Block widths, two digits per unit.
    pub fn blocks(&self) -> Vec<usize> {
        vec![2; self.units.len()]
    }
}

impl Default for TimePattern {
    fn default() -> Self {
        Self {
            units: vec![TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second],
        }
    }
}

impl FromStr for TimePattern {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = s
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.' | ',' | ' '))
            .map(TimeUnit::from_tag)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&units)
    }
}

impl TryFrom<String> for TimePattern {
    type Error = MaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit.tag())?;
        }
        Ok(())
    }
}

impl From<TimePattern> for String {
    fn from(pattern: TimePattern) -> Self {
        pattern.to_string()
    }
}

/// 12 or 24 hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    /// Hours 00-12.
    #[cfg_attr(feature = "serde", serde(rename = "12"))]
    TwelveHour,
    /// Hours 00-23.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24"))]
    TwentyFourHour,
}

impl TimeFormat {
    /// Largest digit an hour may start with before it is zero-padded.
    #[inline]
    pub const fn max_hour_first_digit(&self) -> u32 {
        match self {
            Self::TwelveHour => 1,
            Self::TwentyFourHour => 2,
        }
    }

    /// Largest hour value.
    #[inline]
    pub const fn max_hours(&self) -> u32 {
        match self {
            Self::TwelveHour => 12,
            Self::TwentyFourHour => 23,
        }
    }
}

impl FromStr for TimeFormat {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12" => Ok(Self::TwelveHour),
            "24" => Ok(Self::TwentyFourHour),
            other => Err(MaskError::UnknownOption {
                option: "time format",
                input: other.to_string(),
            }),
        }
    }
}

/// Largest digit a minute or second may start with.
const MAX_MINUTE_FIRST_DIGIT: u32 = 5;

/// Largest minute or second value.
const MAX_MINUTES: u32 = 59;

/// Options for [`format_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeOptions {
    /// Delimiter between blocks.
    pub delimiter: String,
    /// Unit order.
    pub pattern: TimePattern,
    /// Hour clamp bounds.
    pub format: TimeFormat,
    /// Show the delimiter as soon as the next block starts.
    pub lazy_show: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_TIME_DELIMITER.to_string(),
            pattern: TimePattern::default(),
            format: TimeFormat::default(),
            lazy_show: false,
        }
    }
}

impl TimeOptions {
    /// Checks the options for mistakes that would make formatting unreliable.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::DelimiterCollision`] when the delimiter contains
    /// a digit.
    pub fn validate(&self) -> Result<(), MaskError> {
        if self.delimiter.chars().any(|c| c.is_ascii_digit()) {
            return Err(MaskError::DelimiterCollision {
                delimiter: self.delimiter.clone(),
            });
        }
        Ok(())
    }
}

/// Corrects a digit string against a time pattern.
///
/// # Example
///
/// ```
/// use input_mask::time::{validate_time_digits, TimeFormat, TimePattern};
///
/// let pattern = TimePattern::default();
/// assert_eq!(validate_time_digits("9", &pattern, TimeFormat::TwentyFourHour), "09");
/// assert_eq!(validate_time_digits("13", &pattern, TimeFormat::TwelveHour), "12");
/// ```
pub fn validate_time_digits(digits: &str, pattern: &TimePattern, format: TimeFormat) -> String {
    let mut result = String::with_capacity(digits.len());
    let mut rest = digits;

    for unit in pattern.units() {
        if rest.is_empty() {
            break;
        }
        let (sub, tail) = rest.split_at(2.min(rest.len()));
        let fixed = match unit {
            TimeUnit::Hour => clamp_unit(sub, format.max_hour_first_digit(), format.max_hours(), false),
            TimeUnit::Minute | TimeUnit::Second => {
                clamp_unit(sub, MAX_MINUTE_FIRST_DIGIT, MAX_MINUTES, false)
            }
        };
        if fixed != sub {
            tracing::trace!(unit = %unit.tag(), from = sub, to = %fixed, "clamped time unit");
        }
        result.push_str(&fixed);
        rest = tail;
    }

    result
}

/// Formats a time as it is typed.
pub fn format_time(value: &str, options: &TimeOptions) -> String {
    let digits = strip_non_numeric(value);
    let corrected = validate_time_digits(&digits, &options.pattern, options.format);

    let blocks = options.pattern.blocks();
    let corrected = head(&corrected, max_length(&blocks));

    format_blocks(
        &corrected,
        &blocks,
        &Delimiter::Single(options.delimiter.clone()),
        options.lazy_show,
    )
}

/// Strips a formatted time back to its digits.
pub fn unformat_time(value: &str) -> String {
    strip_non_numeric(value)
}
