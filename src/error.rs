//! Configuration error types.
//!
//! Formatting itself never fails: every `format_*` function is total over
//! arbitrary input. The only errors this crate reports come from static
//! configuration supplied by the integrating developer (patterns, bounds,
//! delimiters), and they are reported when that configuration is built.

use std::fmt;

/// Errors raised while building mask configuration.
///
/// Each variant names the offending piece of configuration so the mistake can
/// be fixed at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A date or time pattern was given no units.
    EmptyPattern,

    /// A unit tag appears more than once in a pattern.
    DuplicateUnit {
        /// The repeated tag, e.g. `'d'` or `'h'`.
        unit: char,
    },

    /// A character is not a known unit tag for the pattern kind.
    UnknownUnit {
        /// The unrecognized tag.
        unit: char,
    },

    /// A date pattern contains both a 4-digit (`Y`) and a 2-digit (`y`) year.
    MixedYearUnits,

    /// A date bound string could not be parsed.
    InvalidDateBound {
        /// The rejected input.
        input: String,
    },

    /// A delimiter contains characters that are valid content for the domain.
    DelimiterCollision {
        /// The rejected delimiter.
        delimiter: String,
    },

    /// A general mask was configured without any blocks.
    EmptyBlocks,

    /// A block pattern contains a zero-width block.
    ZeroWidthBlock {
        /// Position of the block in the pattern.
        index: usize,
    },

    /// A phone region code is not in the built-in table.
    UnknownRegion {
        /// The rejected region code.
        input: String,
    },

    /// A mask name is not recognized.
    UnknownMask {
        /// The rejected name.
        input: String,
    },

    /// A JSON options document could not be decoded.
    InvalidOptions {
        /// The decoder's message.
        message: String,
    },

    /// A named option value (time format, group style, ...) is not recognized.
    UnknownOption {
        /// The option being parsed.
        option: &'static str,
        /// The rejected value.
        input: String,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "pattern must contain at least one unit"),

            Self::DuplicateUnit { unit } => {
                write!(f, "unit '{}' appears more than once in the pattern", unit)
            }

            Self::UnknownUnit { unit } => {
                write!(f, "unknown unit '{}' in pattern", unit.escape_default())
            }

            Self::MixedYearUnits => {
                write!(f, "date pattern cannot mix 4-digit 'Y' and 2-digit 'y' years")
            }

            Self::InvalidDateBound { input } => {
                write!(
                    f,
                    "invalid date bound '{}' (expected YYYY-MM-DD or DD-MM-YYYY)",
                    input
                )
            }

            Self::DelimiterCollision { delimiter } => {
                write!(
                    f,
                    "delimiter '{}' collides with characters the value may contain",
                    delimiter
                )
            }

            Self::EmptyBlocks => write!(f, "block pattern must contain at least one block"),

            Self::ZeroWidthBlock { index } => {
                write!(f, "block {} has zero width", index)
            }

            Self::UnknownRegion { input } => {
                write!(f, "unknown phone region '{}'", input)
            }

            Self::UnknownMask { input } => {
                write!(
                    f,
                    "unknown mask '{}' (expected credit-card, date, time, numeral, phone or general)",
                    input
                )
            }

            Self::InvalidOptions { message } => {
                write!(f, "invalid mask options: {}", message)
            }

            Self::UnknownOption { option, input } => {
                write!(f, "unknown {} '{}'", option, input)
            }
        }
    }
}

impl std::error::Error for MaskError {}
