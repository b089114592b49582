//! Generic block formatting.
//!
//! A block pattern splits a character stream into fixed-width segments and
//! re-inserts delimiters between them. Every domain formatter in this crate
//! ends with a call to [`format_blocks`].
//!
//! # Example
//!
//! ```
//! use input_mask::blocks::{format_blocks, Delimiter};
//!
//! let delimiter = Delimiter::from("-");
//!
//! // Eager: the delimiter follows each completed block
//! assert_eq!(format_blocks("1234", &[2, 2, 4], &delimiter, false), "12-34-");
//!
//! // Lazy: the delimiter appears once the next block starts
//! assert_eq!(format_blocks("1234", &[2, 2, 4], &delimiter, true), "12-34");
//! assert_eq!(format_blocks("12345", &[2, 2, 4], &delimiter, true), "12-34-5");
//! ```

use crate::error::MaskError;

/// Delimiter configuration for a block pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Delimiter {
    /// The same delimiter between every pair of blocks.
    Single(String),
    /// One delimiter per block boundary; the last entry is reused for any
    /// boundary past the end of the list.
    PerBoundary(Vec<String>),
}

impl Delimiter {
    /// Returns the delimiter placed at the given block boundary.
    ///
    /// Boundary `i` sits between block `i` and block `i + 1`.
    pub fn at(&self, boundary: usize) -> &str {
        match self {
            Self::Single(d) => d,
            Self::PerBoundary(list) => list
                .get(boundary)
                .or_else(|| list.last())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Returns every distinct delimiter string in this configuration.
    pub fn all(&self) -> Vec<&str> {
        match self {
            Self::Single(d) => vec![d.as_str()],
            Self::PerBoundary(list) => list.iter().map(String::as_str).collect(),
        }
    }

    /// Returns true if no delimiter characters would ever be inserted.
    pub fn is_empty(&self) -> bool {
        self.all().iter().all(|d| d.is_empty())
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for Delimiter {
    fn from(delimiter: &str) -> Self {
        Self::Single(delimiter.to_string())
    }
}

impl From<String> for Delimiter {
    fn from(delimiter: String) -> Self {
        Self::Single(delimiter)
    }
}

impl From<Vec<String>> for Delimiter {
    fn from(delimiters: Vec<String>) -> Self {
        Self::PerBoundary(delimiters)
    }
}

impl From<&[&str]> for Delimiter {
    fn from(delimiters: &[&str]) -> Self {
        Self::PerBoundary(delimiters.iter().map(|d| d.to_string()).collect())
    }
}

/// Returns the maximum number of characters a block pattern can hold.
#[inline]
pub fn max_length(blocks: &[usize]) -> usize {
    blocks.iter().sum()
}

/// Checks that a block pattern is usable.
///
/// # Errors
///
/// Returns [`MaskError::EmptyBlocks`] for an empty pattern and
/// [`MaskError::ZeroWidthBlock`] when any block has width zero.
pub fn validate_blocks(blocks: &[usize]) -> Result<(), MaskError> {
    if blocks.is_empty() {
        return Err(MaskError::EmptyBlocks);
    }
    if let Some(index) = blocks.iter().position(|&b| b == 0) {
        return Err(MaskError::ZeroWidthBlock { index });
    }
    Ok(())
}

/// Splits `value` into blocks and joins them with delimiters.
///
/// Blocks are consumed in order. A final block may be shorter than its width
/// (partial input); once the input runs out no further blocks are produced,
/// and characters beyond `max_length(blocks)` are dropped.
///
/// * Eager mode (`lazy_show == false`): a delimiter is appended after a block
///   only when that block is full and another block follows.
/// * Lazy mode: a delimiter is prepended to every block after the first as
///   soon as that block receives input.
pub fn format_blocks(value: &str, blocks: &[usize], delimiter: &Delimiter, lazy_show: bool) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut result = String::with_capacity(value.len() + blocks.len() * 2);
    let mut pos = 0;

    for (index, &width) in blocks.iter().enumerate() {
        if pos >= chars.len() {
            break;
        }

        let end = (pos + width).min(chars.len());
        let sub = &chars[pos..end];

        if lazy_show {
            if index > 0 {
                result.push_str(delimiter.at(index - 1));
            }
            result.extend(sub);
        } else {
            result.extend(sub);
            if sub.len() == width && index + 1 < blocks.len() {
                result.push_str(delimiter.at(index));
            }
        }

        pos = end;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash() -> Delimiter {
        Delimiter::from("-")
    }

    #[test]
    fn test_format_full_blocks() {
        assert_eq!(format_blocks("12345678", &[2, 2, 4], &dash(), false), "12-34-5678");
        assert_eq!(format_blocks("12345678", &[2, 2, 4], &dash(), true), "12-34-5678");
    }

    #[test]
    fn test_format_partial_eager() {
        assert_eq!(format_blocks("1", &[2, 2, 4], &dash(), false), "1");
        assert_eq!(format_blocks("12", &[2, 2, 4], &dash(), false), "12-");
        assert_eq!(format_blocks("123", &[2, 2, 4], &dash(), false), "12-3");
    }

    #[test]
    fn test_format_partial_lazy() {
        assert_eq!(format_blocks("1", &[2, 2, 4], &dash(), true), "1");
        assert_eq!(format_blocks("12", &[2, 2, 4], &dash(), true), "12");
        assert_eq!(format_blocks("123", &[2, 2, 4], &dash(), true), "12-3");
    }

    #[test]
    fn test_no_delimiter_after_last_block() {
        assert_eq!(format_blocks("1234", &[2, 2], &dash(), false), "12-34");
    }

    #[test]
    fn test_extra_input_dropped() {
        assert_eq!(format_blocks("123456789", &[2, 2], &dash(), false), "12-34");
        assert_eq!(format_blocks("123456789", &[2, 2], &dash(), true), "12-34");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_blocks("", &[2, 2], &dash(), false), "");
        assert_eq!(format_blocks("", &[2, 2], &dash(), true), "");
        assert_eq!(format_blocks("123", &[], &dash(), false), "");
    }

    #[test]
    fn test_per_boundary_delimiters() {
        let delimiters = Delimiter::from(&[".", ".", "-"][..]);
        assert_eq!(
            format_blocks("12345678901", &[3, 3, 3, 2], &delimiters, false),
            "123.456.789-01"
        );
        assert_eq!(
            format_blocks("12345678901", &[3, 3, 3, 2], &delimiters, true),
            "123.456.789-01"
        );
    }

    #[test]
    fn test_per_boundary_last_entry_persists() {
        let delimiters = Delimiter::from(&["/", "-"][..]);
        assert_eq!(
            format_blocks("1234567890", &[2, 2, 2, 2, 2], &delimiters, false),
            "12/34-56-78-90"
        );
        assert_eq!(
            format_blocks("1234567890", &[2, 2, 2, 2, 2], &delimiters, true),
            "12/34-56-78-90"
        );
    }

    #[test]
    fn test_multichar_delimiter() {
        let delimiter = Delimiter::from(" - ");
        assert_eq!(format_blocks("123456", &[3, 3], &delimiter, false), "123 - 456");
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(format_blocks("äöüß", &[2, 2], &dash(), false), "äö-üß");
    }

    #[test]
    fn test_delimiter_at() {
        let single = Delimiter::from("/");
        assert_eq!(single.at(0), "/");
        assert_eq!(single.at(7), "/");

        let list = Delimiter::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.at(0), "a");
        assert_eq!(list.at(1), "b");
        assert_eq!(list.at(5), "b");

        let empty = Delimiter::PerBoundary(vec![]);
        assert_eq!(empty.at(0), "");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_max_length() {
        assert_eq!(max_length(&[4, 4, 4, 4]), 16);
        assert_eq!(max_length(&[]), 0);
    }

    #[test]
    fn test_validate_blocks() {
        assert!(validate_blocks(&[2, 2, 4]).is_ok());
        assert_eq!(validate_blocks(&[]), Err(MaskError::EmptyBlocks));
        assert_eq!(
            validate_blocks(&[2, 0, 4]),
            Err(MaskError::ZeroWidthBlock { index: 1 })
        );
    }
}
