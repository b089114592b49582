//! Card brand tags.
//!
//! This module provides the `CardBrand` enum identifying card networks and
//! the digit grouping each network prints on its cards.

use std::fmt;

/// Maximum number of digits in a credit card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Credit card brands recognized while typing.
///
/// Each variant carries its own block pattern; [`CardBrand::General`] is the
/// fallback for prefixes no network claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// UATP - Prefix 1 (except 1800), 4-5-6
    Uatp,
    /// American Express - Prefix 34, 37, 4-6-5
    Amex,
    /// Discover - Prefix 6011, 644-649, 65
    Discover,
    /// Diners Club - Prefix 300-305, 309, 36, 38, 39, 4-6-4
    Diners,
    /// Mastercard - Prefix 51-55, 2221-2799
    Mastercard,
    /// Dankort - Prefix 5019, 4175, 4571
    Dankort,
    /// InstaPayment - Prefix 637-639
    InstaPayment,
    /// JCB 15-digit - Prefix 2131, 1800, 4-6-5
    Jcb15,
    /// JCB - Prefix 35
    Jcb,
    /// Maestro - Prefix 50, 56-58, 6304, 67
    Maestro,
    /// Mir - Russian payment system, Prefix 2200-2204
    Mir,
    /// Visa - Prefix 4
    Visa,
    /// UnionPay - Prefix 62, 81
    UnionPay,
    /// No known brand matched.
    General,
}

impl CardBrand {
    /// Every brand, in detection priority order, followed by `General`.
    pub const ALL: [CardBrand; 14] = [
        Self::Uatp,
        Self::Amex,
        Self::Discover,
        Self::Diners,
        Self::Mastercard,
        Self::Dankort,
        Self::InstaPayment,
        Self::Jcb15,
        Self::Jcb,
        Self::Maestro,
        Self::Mir,
        Self::Visa,
        Self::UnionPay,
        Self::General,
    ];

    /// Returns the digit grouping printed on cards of this brand.
    #[inline]
    pub const fn blocks(&self) -> &'static [usize] {
        match self {
            Self::Uatp => &[4, 5, 6],
            Self::Amex | Self::Jcb15 => &[4, 6, 5],
            Self::Diners => &[4, 6, 4],
            Self::Discover
            | Self::Mastercard
            | Self::Dankort
            | Self::InstaPayment
            | Self::Jcb
            | Self::Maestro
            | Self::Mir
            | Self::Visa
            | Self::UnionPay
            | Self::General => &[4, 4, 4, 4],
        }
    }

    /// Returns the block pattern used in strict mode.
    ///
    /// Strict mode appends one more block so that the pattern can hold up to
    /// [`MAX_CARD_DIGITS`] digits.
    pub fn strict_blocks(&self) -> Vec<usize> {
        let mut blocks = self.blocks().to_vec();
        let total: usize = blocks.iter().sum();
        if total < MAX_CARD_DIGITS {
            blocks.push(MAX_CARD_DIGITS - total);
        }
        blocks
    }

    /// Returns the number of digits a complete card of this brand holds.
    #[inline]
    pub fn max_digits(&self) -> usize {
        self.blocks().iter().sum()
    }

    /// Returns the stable lowercase tag for the brand.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Uatp => "uatp",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Diners => "diners",
            Self::Mastercard => "mastercard",
            Self::Dankort => "dankort",
            Self::InstaPayment => "instapayment",
            Self::Jcb15 => "jcb15",
            Self::Jcb => "jcb",
            Self::Maestro => "maestro",
            Self::Mir => "mir",
            Self::Visa => "visa",
            Self::UnionPay => "unionpay",
            Self::General => "general",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uatp => "UATP",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Diners => "Diners Club",
            Self::Mastercard => "Mastercard",
            Self::Dankort => "Dankort",
            Self::InstaPayment => "InstaPayment",
            Self::Jcb15 => "JCB (15 digits)",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::Mir => "Mir",
            Self::Visa => "Visa",
            Self::UnionPay => "UnionPay",
            Self::General => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
