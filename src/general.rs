//! Free-form block masking.
//!
//! Any text can be cut into blocks: licence keys, tax numbers, postal codes.
//!
//! ```
//! use input_mask::general::{format_general, GeneralOptions};
//!
//! let options = GeneralOptions {
//!     delimiter: (&[".", ".", "-"][..]).into(),
//!     ..GeneralOptions::new(vec![3, 3, 3, 2])
//! };
//! assert_eq!(format_general("12345678901", &options), "123.456.789-01");
//! ```

use crate::blocks::{format_blocks, max_length, validate_blocks, Delimiter};
use crate::error::MaskError;
use crate::strip::{head, strip_delimiters, strip_non_numeric, strip_prefix};

/// Options for [`format_general`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneralOptions {
    /// Block widths. Must be non-empty with no zero entries.
    pub blocks: Vec<usize>,
    /// Delimiter or per-boundary delimiters.
    pub delimiter: Delimiter,
    /// Fixed text shown before the blocks.
    pub prefix: String,
    /// Keep digits only.
    pub numeric_only: bool,
    /// Upper-case the content.
    pub uppercase: bool,
    /// Lower-case the content.
    pub lowercase: bool,
    /// Show the delimiter as soon as the next block starts.
    pub lazy_show: bool,
}

impl GeneralOptions {
    /// Options with the given blocks and everything else at its default.
    pub fn new(blocks: Vec<usize>) -> Self {
        Self {
            blocks,
            ..Default::default()
        }
    }

    /// Checks the options for mistakes that would make formatting unreliable.
    ///
    /// # Errors
    ///
    /// Fails for an empty or zero-width block pattern.
    pub fn validate(&self) -> Result<(), MaskError> {
        validate_blocks(&self.blocks)?;
        if self.uppercase && self.lowercase {
            tracing::debug!("both uppercase and lowercase set, uppercase wins");
        }
        Ok(())
    }
}

/// Formats arbitrary text into blocks.
///
/// The prefix is not counted against the blocks and is followed directly by
/// the first block.
pub fn format_general(value: &str, options: &GeneralOptions) -> String {
    let mut content = strip_delimiters(&strip_prefix(value, &options.prefix), &options.delimiter.all());

    if options.numeric_only {
        content = strip_non_numeric(&content);
    }
    if options.uppercase {
        content = content.to_uppercase();
    } else if options.lowercase {
        content = content.to_lowercase();
    }

    let content = head(&content, max_length(&options.blocks));
    let formatted = format_blocks(&content, &options.blocks, &options.delimiter, options.lazy_show);

    format!("{}{}", options.prefix, formatted)
}

/// Removes the prefix and every delimiter character.
pub fn unformat_general(value: &str, options: &GeneralOptions) -> String {
    strip_delimiters(&strip_prefix(value, &options.prefix), &options.delimiter.all())
}
