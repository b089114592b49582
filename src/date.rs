//! Date masking.
//!
//! Digits are read in the order given by a [`DatePattern`] and corrected as
//! they arrive:
//!
//! 1. Each day or month block is clamped on its own. A leading digit that can
//!    never start a valid value is zero-padded at once (`"4"` becomes `"04"`
//!    for a day, `"3"` becomes `"03"` for a month), `"00"` becomes `"01"`, and
//!    a complete value above the maximum is clamped (`"40"` is impossible,
//!    `"39"` becomes `"31"`, `"13"` becomes `"12"`).
//! 2. Once day and month are both known the day is limited to the length of
//!    the month. February allows the 29th until a non-leap year is typed.
//! 3. Once every unit is complete the date is compared with the optional
//!    [`DateBound`]s and replaced by the violated bound.
//!
//! # Example
//!
//! ```
//! use input_mask::date::{format_date, DateOptions};
//!
//! let options = DateOptions::default(); // dd-mm-YYYY
//!
//! assert_eq!(format_date("311220", &options), "31-12-20");
//! assert_eq!(format_date("31122023", &options), "31-12-2023");
//! assert_eq!(format_date("4", &options), "04-");
//! assert_eq!(format_date("31022023", &options), "28-02-2023");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::blocks::{format_blocks, max_length, Delimiter};
use crate::error::MaskError;
use crate::strip::{head, strip_non_numeric};

/// Default delimiter between date blocks.
pub const DEFAULT_DATE_DELIMITER: &str = "-";

/// One semantic unit of a date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Day of month, two digits (`d`).
    Day,
    /// Month, two digits (`m`).
    Month,
    /// Four-digit year (`Y`).
    Year,
    /// Two-digit year (`y`).
    ShortYear,
}

impl DateUnit {
    /// Number of digits the unit occupies.
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            Self::Year => 4,
            Self::Day | Self::Month | Self::ShortYear => 2,
        }
    }

    /// The single-character tag of the unit.
    #[inline]
    pub const fn tag(&self) -> char {
        match self {
            Self::Day => 'd',
            Self::Month => 'm',
            Self::Year => 'Y',
            Self::ShortYear => 'y',
        }
    }

    /// Parses a unit tag.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::UnknownUnit`] for anything but `d`, `m`, `Y`, `y`.
    pub fn from_tag(tag: char) -> Result<Self, MaskError> {
        match tag {
            'd' => Ok(Self::Day),
            'm' => Ok(Self::Month),
            'Y' => Ok(Self::Year),
            'y' => Ok(Self::ShortYear),
            unit => Err(MaskError::UnknownUnit { unit }),
        }
    }

    #[inline]
    const fn is_year(&self) -> bool {
        matches!(self, Self::Year | Self::ShortYear)
    }
}

/// Ordered date units, each appearing at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DatePattern {
    units: Vec<DateUnit>,
}

impl DatePattern {
    /// Builds a pattern from units.
    ///
    /// # Errors
    ///
    /// Fails for an empty pattern, a repeated unit, or a pattern holding both
    /// `Y` and `y`.
    ///
    /// # Example
    ///
    /// ```
    /// use input_mask::date::{DatePattern, DateUnit};
    ///
    /// let iso = DatePattern::new(&[DateUnit::Year, DateUnit::Month, DateUnit::Day]).unwrap();
    /// assert_eq!(iso.blocks(), vec![4, 2, 2]);
    ///
    /// assert!(DatePattern::new(&[DateUnit::Day, DateUnit::Day]).is_err());
    /// ```
    pub fn new(units: &[DateUnit]) -> Result<Self, MaskError> {
        if units.is_empty() {
            return Err(MaskError::EmptyPattern);
        }
        for (i, unit) in units.iter().enumerate() {
            if units[..i].contains(unit) {
                return Err(MaskError::DuplicateUnit { unit: unit.tag() });
            }
        }
        if units.contains(&DateUnit::Year) && units.contains(&DateUnit::ShortYear) {
            return Err(MaskError::MixedYearUnits);
        }
        Ok(Self {
            units: units.to_vec(),
        })
    }

    /// The units in display order.
    #[inline]
    pub fn units(&self) -> &[DateUnit] {
        &self.units
    }

    /// Block widths derived from the units.
    pub fn blocks(&self) -> Vec<usize> {
        self.units.iter().map(DateUnit::width).collect()
    }

    /// Returns true if the pattern contains `unit`.
    #[inline]
    pub fn contains(&self, unit: DateUnit) -> bool {
        self.units.contains(&unit)
    }

    fn has_year(&self) -> bool {
        self.units.iter().any(DateUnit::is_year)
    }

    fn has_short_year(&self) -> bool {
        self.contains(DateUnit::ShortYear)
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            units: vec![DateUnit::Day, DateUnit::Month, DateUnit::Year],
        }
    }
}

impl FromStr for DatePattern {
    type Err = MaskError;

    /// Parses tags such as `"dmY"`, `"Y-m-d"` or `"m/y"`; separators are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = s
            .chars()
            .filter(|c| !matches!(c, '-' | '/' | '.' | ',' | ' '))
            .map(DateUnit::from_tag)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&units)
    }
}

impl TryFrom<String> for DatePattern {
    type Error = MaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit.tag())?;
        }
        Ok(())
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.to_string()
    }
}

/// A minimum or maximum date.
///
/// Parsed from `YYYY-MM-DD` or `DD-MM-YYYY` (`/` and `.` work as separators
/// too). Two-component bounds (`YYYY-MM`, `MM-YYYY`, `YY-MM`) are accepted but
/// have no day and never take part in range correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DateBound {
    year: u32,
    month: u32,
    day: Option<u32>,
}

impl DateBound {
    /// Builds a complete bound.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidDateBound`] when the month or day is out of
    /// range for the calendar.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, MaskError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(month, Some(year)) {
            return Err(MaskError::InvalidDateBound {
                input: format!("{:04}-{:02}-{:02}", year, month, day),
            });
        }
        Ok(Self {
            year,
            month,
            day: Some(day),
        })
    }

    /// The bound's year.
    #[inline]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// The bound's month (1-12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The bound's day, if one was given.
    #[inline]
    pub const fn day(&self) -> Option<u32> {
        self.day
    }

    /// Returns true if year, month and day are all present.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.day.is_some()
    }
}

impl FromStr for DateBound {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MaskError::InvalidDateBound {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(['-', '/', '.']).collect();
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(invalid());
        }
        let numbers: Vec<u32> = parts
            .iter()
            .map(|p| p.parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        match (parts.as_slice(), numbers.as_slice()) {
            ([first, ..], &[a, b, c]) => {
                let (year, month, day) = if first.len() == 4 || parts[2].len() != 4 {
                    (a, b, c)
                } else {
                    (c, b, a)
                };
                Self::new(year, month, day).map_err(|_| invalid())
            }
            ([first, _], &[a, b]) => {
                let (year, month) = if first.len() == 4 || parts[1].len() != 4 {
                    (a, b)
                } else {
                    (b, a)
                };
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
                Ok(Self {
                    year,
                    month,
                    day: None,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for DateBound {
    type Error = MaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "{:04}-{:02}-{:02}", self.year, self.month, day),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

impl From<DateBound> for String {
    fn from(bound: DateBound) -> Self {
        bound.to_string()
    }
}

/// Options for [`format_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateOptions {
    /// Delimiter between blocks.
    pub delimiter: String,
    /// Unit order.
    pub pattern: DatePattern,
    /// Earliest accepted date.
    pub min: Option<DateBound>,
    /// Latest accepted date.
    pub max: Option<DateBound>,
    /// Show the delimiter as soon as the next block starts.
    pub lazy_show: bool,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DATE_DELIMITER.to_string(),
            pattern: DatePattern::default(),
            min: None,
            max: None,
            lazy_show: false,
        }
    }
}

impl DateOptions {
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

/// Returns true for Gregorian leap years.
#[inline]
pub const fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month`; an unknown year allows February 29th.
pub const fn days_in_month(month: u32, year: Option<u32>) -> u32 {
    match month {
        2 => match year {
            Some(y) if !is_leap_year(y) => 28,
            _ => 29,
        },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Clamps one two-digit unit block.
///
/// `sub` holds the one or two digits typed for the unit so far. A leading
/// digit above `max_first_digit` is zero-padded, a full value above `max`
/// becomes `max`, and with `floor_one` the value `"00"` becomes `"01"`.
pub(crate) fn clamp_unit(sub: &str, max_first_digit: u32, max: u32, floor_one: bool) -> String {
    let Some(first) = sub.chars().next().and_then(|c| c.to_digit(10)) else {
        return sub.to_string();
    };

    if floor_one && sub == "00" {
        "01".to_string()
    } else if first > max_first_digit {
        format!("0{}", first)
    } else if sub.len() == 2 && sub.parse::<u32>().map_or(false, |v| v > max) {
        format!("{:02}", max)
    } else {
        sub.to_string()
    }
}

/// Corrects a digit string against a date pattern and optional bounds.
///
/// Input must already be stripped to digits. The result is at most
/// `sum(pattern.blocks())` digits long and contains no delimiters.
///
/// # Example
///
/// ```
/// use input_mask::date::{validate_date_digits, DatePattern};
///
/// let pattern = DatePattern::default();
/// assert_eq!(validate_date_digits("4", &pattern, None, None), "04");
/// assert_eq!(validate_date_digits("3913", &pattern, None, None), "3112");
/// ```
pub fn validate_date_digits(
    digits: &str,
    pattern: &DatePattern,
    min: Option<&DateBound>,
    max: Option<&DateBound>,
) -> String {
    let clamped = clamp_units(digits, pattern);
    fix_date(&clamped, pattern, min, max)
}

fn clamp_units(digits: &str, pattern: &DatePattern) -> String {
    let mut result = String::with_capacity(digits.len());
    let mut rest = digits;

    for unit in pattern.units() {
        if rest.is_empty() {
            break;
        }
        let (sub, tail) = rest.split_at(unit.width().min(rest.len()));
        let fixed = match unit {
            DateUnit::Day => clamp_unit(sub, 3, 31, true),
            DateUnit::Month => clamp_unit(sub, 1, 12, true),
            DateUnit::Year | DateUnit::ShortYear => sub.to_string(),
        };
        if fixed != sub {
            tracing::trace!(unit = %unit.tag(), from = sub, to = %fixed, "clamped date unit");
        }
        result.push_str(&fixed);
        rest = tail;
    }

    result
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DateParts {
    year: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
}

fn fix_date(
    clamped: &str,
    pattern: &DatePattern,
    min: Option<&DateBound>,
    max: Option<&DateBound>,
) -> String {
    // Split the digits back into per-unit segments.
    let mut segments: Vec<(DateUnit, &str)> = Vec::with_capacity(pattern.units().len());
    let mut rest = clamped;
    for &unit in pattern.units() {
        if rest.is_empty() {
            break;
        }
        let (sub, tail) = rest.split_at(unit.width().min(rest.len()));
        segments.push((unit, sub));
        rest = tail;
    }

    let mut parts = DateParts::default();
    for &(unit, sub) in &segments {
        if sub.len() != unit.width() {
            continue;
        }
        let value = sub.parse::<u32>().ok();
        match unit {
            DateUnit::Day => parts.day = value,
            DateUnit::Month => parts.month = value,
            DateUnit::Year | DateUnit::ShortYear => parts.year = value,
        }
    }

    if let (Some(day), Some(month)) = (parts.day, parts.month) {
        parts.day = Some(day.min(days_in_month(month, parts.year)));
    }

    let complete = segments.len() == pattern.units().len()
        && segments.iter().all(|(unit, sub)| sub.len() == unit.width());
    if complete {
        parts = fix_range(parts, pattern, min, max);
    }

    let mut result = String::with_capacity(clamped.len());
    for &(unit, sub) in &segments {
        if sub.len() != unit.width() {
            result.push_str(sub);
            continue;
        }
        match unit {
            DateUnit::Day => push_padded(&mut result, parts.day, 2),
            DateUnit::Month => push_padded(&mut result, parts.month, 2),
            DateUnit::Year => push_padded(&mut result, parts.year, 4),
            DateUnit::ShortYear => push_padded(&mut result, parts.year.map(|y| y % 100), 2),
        }
    }
    result
}

fn push_padded(result: &mut String, value: Option<u32>, width: usize) {
    if let Some(v) = value {
        result.push_str(&format!("{:0width$}", v, width = width));
    }
}

/// Comparison key over the units the pattern actually has.
fn sort_key(year: u32, month: u32, day: u32, pattern: &DatePattern) -> (u32, u32, u32) {
    (
        if pattern.has_year() { year } else { 0 },
        if pattern.contains(DateUnit::Month) { month } else { 0 },
        if pattern.contains(DateUnit::Day) { day } else { 0 },
    )
}

fn bound_parts(bound: &DateBound) -> Option<DateParts> {
    let day = bound.day?;
    Some(DateParts {
        year: Some(bound.year),
        month: Some(bound.month),
        day: Some(day),
    })
}

/// Places a two-digit year in the century that puts it inside `[low, high]`,
/// or else the nearest candidate century.
fn expand_short_year(short: u32, low: u32, high: u32) -> u32 {
    let distance = |year: u32| {
        if year < low {
            low - year
        } else {
            year.saturating_sub(high)
        }
    };

    (low / 100..=high / 100)
        .map(|century| century * 100 + short % 100)
        .min_by_key(|&year| distance(year))
        .unwrap_or(short)
}

fn fix_range(
    mut parts: DateParts,
    pattern: &DatePattern,
    min: Option<&DateBound>,
    max: Option<&DateBound>,
) -> DateParts {
    let usable = |bound: Option<&DateBound>| {
        let bound = bound?;
        let parts = bound_parts(bound);
        if parts.is_none() {
            tracing::debug!(%bound, "ignoring date bound without a day");
        }
        parts
    };
    let max = usable(max);
    let min = usable(min);

    // bounds carry full years; a typed short year is compared in their window
    if pattern.has_short_year() {
        let low = min.or(max).and_then(|b| b.year);
        let high = max.or(min).and_then(|b| b.year);
        if let (Some(short), Some(low), Some(high)) = (parts.year, low, high) {
            parts.year = Some(expand_short_year(short, low, high.max(low)));
        }
    }

    let key_of = |p: &DateParts| {
        sort_key(
            p.year.unwrap_or(0),
            p.month.unwrap_or(0),
            p.day.unwrap_or(0),
            pattern,
        )
    };
    let key = key_of(&parts);

    if let Some(max) = max {
        if key > key_of(&max) {
            tracing::trace!(?key, "date above maximum, using bound");
            return max;
        }
    }
    if let Some(min) = min {
        if key < key_of(&min) {
            tracing::trace!(?key, "date below minimum, using bound");
            return min;
        }
    }
    parts
}

/// Formats a date as it is typed.
///
/// Non-digits are discarded, the digits are corrected with
/// [`validate_date_digits`], truncated to the pattern's width and
/// block-formatted.
pub fn format_date(value: &str, options: &DateOptions) -> String {
    let digits = strip_non_numeric(value);
    let corrected = validate_date_digits(
        &digits,
        &options.pattern,
        options.min.as_ref(),
        options.max.as_ref(),
    );

    let blocks = options.pattern.blocks();
    let corrected = head(&corrected, max_length(&blocks));

    format_blocks(
        &corrected,
        &blocks,
        &Delimiter::Single(options.delimiter.clone()),
        options.lazy_show,
    )
}

/// Strips a formatted date back to its digits.
pub fn unformat_date(value: &str) -> String {
    strip_non_numeric(value)
}
