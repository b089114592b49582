//! Streaming formatting for values that arrive one at a time.
//!
//! This module provides iterator adapters that run a [`Mask`] over every item
//! of an iterator, useful for reformatting imported records or log lines
//! without collecting them first.
//!
//! # Example
//!
//! ```
//! use input_mask::stream::FormatExt;
//! use input_mask::Mask;
//!
//! let mask: Mask = "phone".parse().unwrap();
//! let numbers = ["5551234567", "(555) 765-4321"];
//! let formatted: Vec<String> = numbers.iter().format_with(&mask).collect();
//!
//! assert_eq!(formatted, ["555 123 4567", "555 765 4321"]);
//! ```

use crate::mask::Mask;

/// Formats every string yielded by the inner iterator.
///
/// This struct is created by [`FormatExt::format_with`].
#[derive(Debug, Clone)]
pub struct FormatStream<'m, I> {
    inner: I,
    mask: &'m Mask,
}

impl<'m, I> FormatStream<'m, I> {
    /// Creates a new stream over `inner`.
    #[inline]
    pub fn new(inner: I, mask: &'m Mask) -> Self {
        Self { inner, mask }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for FormatStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.mask.format(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for FormatStream<'_, I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for FormatStream<'_, I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| self.mask.format(s.as_ref()))
    }
}

/// Strips the formatting from every string yielded by the inner iterator.
///
/// This struct is created by [`FormatExt::unformat_with`].
#[derive(Debug, Clone)]
pub struct UnformatStream<'m, I> {
    inner: I,
    mask: &'m Mask,
}

impl<I, S> Iterator for UnformatStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.mask.unformat(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding mask adapters to any iterator.
///
/// Implemented for all iterators; the adapters require string-like items.
pub trait FormatExt: Iterator + Sized {
    /// Formats each item with `mask`.
    fn format_with(self, mask: &Mask) -> FormatStream<'_, Self>;

    /// Unformats each item with `mask`.
    ///
    /// # Example
    ///
    /// ```
    /// use input_mask::stream::FormatExt;
    /// use input_mask::Mask;
    ///
    /// let mask: Mask = "date".parse().unwrap();
    /// let digits: Vec<String> = ["31-12-2023"].iter().unformat_with(&mask).collect();
    /// assert_eq!(digits, ["31122023"]);
    /// ```
    fn unformat_with(self, mask: &Mask) -> UnformatStream<'_, Self>;
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn format_with(self, mask: &Mask) -> FormatStream<'_, Self> {
        FormatStream::new(self, mask)
    }

    #[inline]
    fn unformat_with(self, mask: &Mask) -> UnformatStream<'_, Self> {
        UnformatStream { inner: self, mask }
    }
}

/// Formats a slice of strings with one mask.
#[inline]
pub fn format_all<'a, S: AsRef<str>>(values: &'a [S], mask: &'a Mask) -> FormatStream<'a, std::slice::Iter<'a, S>> {
    FormatStream::new(values.iter(), mask)
}
