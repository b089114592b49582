//! Card brand detection from a partially typed number.
//!
//! Brands are resolved from the leading digits using an ordered table of
//! prefix rules; the first rule that matches wins. More specific prefixes are
//! listed before the broader ones they overlap with (UATP excludes `1800` so
//! that JCB15 can claim it, Dankort's `4175`/`4571` come before Visa's `4`).
//!
//! Detection runs again on every keystroke. A prefix that several brands
//! share resolves to whichever rule accepts it first, and typing more digits
//! can move it to another brand:
//!
//! ```
//! use input_mask::detect::detect_brand;
//! use input_mask::CardBrand;
//!
//! assert_eq!(detect_brand(&[1, 8, 0]), CardBrand::Uatp);
//! assert_eq!(detect_brand(&[1, 8, 0, 0]), CardBrand::Jcb15);
//! ```

use crate::CardBrand;

/// One entry of the detection table.
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    /// Brand selected when the rule matches.
    pub brand: CardBrand,
    /// Predicate over the leading digits (values 0-9).
    pub matches: fn(&[u8]) -> bool,
}

/// The detection table, in priority order.
pub static BRAND_RULES: &[BrandRule] = &[
    // 1 but not 1800 (1800 belongs to JCB15)
    BrandRule {
        brand: CardBrand::Uatp,
        matches: |d| matches!(d, [1, ..]) && !matches!(d, [1, 8, 0, 0, ..]),
    },
    BrandRule {
        brand: CardBrand::Amex,
        matches: |d| matches!(d, [3, 4 | 7, ..]),
    },
    BrandRule {
        brand: CardBrand::Discover,
        matches: |d| matches!(d, [6, 0, 1, 1, ..] | [6, 5, ..] | [6, 4, 4..=9, ..]),
    },
    BrandRule {
        brand: CardBrand::Diners,
        matches: |d| matches!(d, [3, 0, 0..=5 | 9, ..] | [3, 6 | 8 | 9, ..]),
    },
    // 51-55 or 2221-2799
    BrandRule {
        brand: CardBrand::Mastercard,
        matches: |d| matches!(d, [5, 1..=5, ..] | [2, 2, 2..=9, ..] | [2, 3..=7, ..]),
    },
    BrandRule {
        brand: CardBrand::Dankort,
        matches: |d| matches!(d, [5, 0, 1, 9, ..] | [4, 1, 7, 5, ..] | [4, 5, 7, 1, ..]),
    },
    BrandRule {
        brand: CardBrand::InstaPayment,
        matches: |d| matches!(d, [6, 3, 7..=9, ..]),
    },
    BrandRule {
        brand: CardBrand::Jcb15,
        matches: |d| matches!(d, [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..]),
    },
    BrandRule {
        brand: CardBrand::Jcb,
        matches: |d| matches!(d, [3, 5, ..]),
    },
    BrandRule {
        brand: CardBrand::Maestro,
        matches: |d| matches!(d, [5, 0 | 6 | 7 | 8, ..] | [6, 3, 0, 4, ..] | [6, 7, ..]),
    },
    BrandRule {
        brand: CardBrand::Mir,
        matches: |d| matches!(d, [2, 2, 0, 0..=4, ..]),
    },
    BrandRule {
        brand: CardBrand::Visa,
        matches: |d| matches!(d, [4, ..]),
    },
    BrandRule {
        brand: CardBrand::UnionPay,
        matches: |d| matches!(d, [6, 2, ..] | [8, 1, ..]),
    },
];

/// Detects the card brand from a sequence of digits.
///
/// # Arguments
///
/// * `digits` - The digits typed so far (values 0-9).
///
/// # Returns
///
/// The first brand whose rule accepts the prefix, or [`CardBrand::General`].
///
/// # Example
///
/// ```
/// use input_mask::detect::detect_brand;
/// use input_mask::CardBrand;
///
/// assert_eq!(detect_brand(&[4, 1, 1, 1]), CardBrand::Visa);
/// assert_eq!(detect_brand(&[3, 7]), CardBrand::Amex);
/// assert_eq!(detect_brand(&[]), CardBrand::General);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> CardBrand {
    BRAND_RULES
        .iter()
        .find(|rule| (rule.matches)(digits))
        .map(|rule| rule.brand)
        .unwrap_or(CardBrand::General)
}

/// Detects the card brand from a string, ignoring every non-digit character.
///
/// # Example
///
/// ```
/// use input_mask::detect::detect_brand_str;
/// use input_mask::CardBrand;
///
/// assert_eq!(detect_brand_str("3782 822463"), CardBrand::Amex);
/// ```
pub fn detect_brand_str(value: &str) -> CardBrand {
    // A brand never needs more than four leading digits.
    let digits: Vec<u8> = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .map(|c| c as u8 - b'0')
        .collect();
    detect_brand(&digits)
}

/// A detected brand together with the block pattern to format with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// The detected brand.
    pub brand: CardBrand,
    /// Block pattern for the brand (extended to 19 digits in strict mode).
    pub blocks: Vec<usize>,
}

/// Detects the brand of `value` and selects its block pattern.
pub fn card_info(value: &str, strict_mode: bool) -> CardInfo {
    let brand = detect_brand_str(value);
    let blocks = if strict_mode {
        brand.strict_blocks()
    } else {
        brand.blocks().to_vec()
    };
    tracing::trace!(brand = brand.tag(), strict_mode, "resolved card brand");
    CardInfo { brand, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand(&[4]), CardBrand::Visa);
        assert_eq!(
            detect_brand(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
            CardBrand::Visa
        );
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range
        assert_eq!(detect_brand(&[5, 1]), CardBrand::Mastercard);
        assert_eq!(detect_brand(&[5, 5, 0, 0]), CardBrand::Mastercard);
        // 2-series
        assert_eq!(detect_brand(&[2, 2, 2, 1]), CardBrand::Mastercard);
        assert_eq!(detect_brand(&[2, 7, 2, 0]), CardBrand::Mastercard);
        assert_eq!(detect_brand(&[2, 3]), CardBrand::Mastercard);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand(&[3, 4]), CardBrand::Amex);
        assert_eq!(detect_brand(&[3, 7, 8, 2]), CardBrand::Amex);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_brand(&[6, 0, 1, 1]), CardBrand::Discover);
        assert_eq!(detect_brand(&[6, 5]), CardBrand::Discover);
        assert_eq!(detect_brand(&[6, 4, 4]), CardBrand::Discover);
        assert_eq!(detect_brand(&[6, 4, 9]), CardBrand::Discover);
    }

    #[test]
    fn test_diners_detection() {
        assert_eq!(detect_brand(&[3, 0, 0]), CardBrand::Diners);
        assert_eq!(detect_brand(&[3, 0, 5]), CardBrand::Diners);
        assert_eq!(detect_brand(&[3, 0, 9]), CardBrand::Diners);
        assert_eq!(detect_brand(&[3, 6]), CardBrand::Diners);
        assert_eq!(detect_brand(&[3, 8]), CardBrand::Diners);
        assert_eq!(detect_brand(&[3, 9]), CardBrand::Diners);
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(detect_brand(&[3, 5]), CardBrand::Jcb);
        assert_eq!(detect_brand(&[3, 5, 2, 8]), CardBrand::Jcb);
        assert_eq!(detect_brand(&[2, 1, 3, 1]), CardBrand::Jcb15);
        assert_eq!(detect_brand(&[1, 8, 0, 0]), CardBrand::Jcb15);
    }

    #[test]
    fn test_dankort_before_visa_and_maestro() {
        assert_eq!(detect_brand(&[4, 1, 7, 5]), CardBrand::Dankort);
        assert_eq!(detect_brand(&[4, 5, 7, 1]), CardBrand::Dankort);
        assert_eq!(detect_brand(&[5, 0, 1, 9]), CardBrand::Dankort);
        // shorter prefixes still fall through to the broader brands
        assert_eq!(detect_brand(&[4, 1, 7]), CardBrand::Visa);
        assert_eq!(detect_brand(&[5, 0, 1]), CardBrand::Maestro);
    }

    #[test]
    fn test_maestro_detection() {
        assert_eq!(detect_brand(&[5, 0]), CardBrand::Maestro);
        assert_eq!(detect_brand(&[5, 6]), CardBrand::Maestro);
        assert_eq!(detect_brand(&[5, 8]), CardBrand::Maestro);
        assert_eq!(detect_brand(&[6, 3, 0, 4]), CardBrand::Maestro);
        assert_eq!(detect_brand(&[6, 7]), CardBrand::Maestro);
    }

    #[test]
    fn test_instapayment_detection() {
        assert_eq!(detect_brand(&[6, 3, 7]), CardBrand::InstaPayment);
        assert_eq!(detect_brand(&[6, 3, 9]), CardBrand::InstaPayment);
    }

    #[test]
    fn test_mir_detection() {
        assert_eq!(detect_brand(&[2, 2, 0, 0]), CardBrand::Mir);
        assert_eq!(detect_brand(&[2, 2, 0, 4]), CardBrand::Mir);
        assert_eq!(detect_brand(&[2, 2, 0, 5]), CardBrand::General);
    }

    #[test]
    fn test_unionpay_detection() {
        assert_eq!(detect_brand(&[6, 2]), CardBrand::UnionPay);
        assert_eq!(detect_brand(&[8, 1]), CardBrand::UnionPay);
    }

    #[test]
    fn test_uatp_detection() {
        assert_eq!(detect_brand(&[1]), CardBrand::Uatp);
        assert_eq!(detect_brand(&[1, 8, 0]), CardBrand::Uatp);
        assert_eq!(detect_brand(&[1, 8, 0, 1]), CardBrand::Uatp);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect_brand(&[0, 0, 0, 0]), CardBrand::General);
        assert_eq!(detect_brand(&[9]), CardBrand::General);
        assert_eq!(detect_brand(&[2]), CardBrand::General);
        assert_eq!(detect_brand(&[2, 2]), CardBrand::General);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_brand(&[]), CardBrand::General);
        assert_eq!(detect_brand_str(""), CardBrand::General);
        assert_eq!(detect_brand_str("abc"), CardBrand::General);
    }

    #[test]
    fn test_prefix_resolves_as_digits_arrive() {
        // "22" is shared by Mir and Mastercard, so neither claims it yet
        assert_eq!(detect_brand_str("22"), CardBrand::General);
        assert_eq!(detect_brand_str("222"), CardBrand::Mastercard);
        assert_eq!(detect_brand_str("2200"), CardBrand::Mir);
    }

    #[test]
    fn test_card_info_blocks() {
        let info = card_info("3782", false);
        assert_eq!(info.brand, CardBrand::Amex);
        assert_eq!(info.blocks, vec![4, 6, 5]);

        let info = card_info("3782", true);
        assert_eq!(info.blocks, vec![4, 6, 5, 4]);

        let info = card_info("9999", false);
        assert_eq!(info.brand, CardBrand::General);
        assert_eq!(info.blocks, vec![4, 4, 4, 4]);
    }

    #[test]
    fn test_every_brand_is_reachable() {
        for brand in CardBrand::ALL {
            if brand == CardBrand::General {
                continue;
            }
            assert!(
                BRAND_RULES.iter().any(|rule| rule.brand == brand),
                "{:?} has no rule",
                brand
            );
        }
    }
}
