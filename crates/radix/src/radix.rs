// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::RadixError;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base (`0`-`9` then `a`-`z`).
pub const MAX_BASE: u32 = 36;

/// A numeric base known to lie in `MIN_BASE..=MAX_BASE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Validates `base` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `RadixError::BaseUnsupported` if `base` is outside 2..=36.
    pub fn new(base: u32) -> Result<Self, RadixError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(RadixError::BaseUnsupported { base: base.into() });
        }
        Ok(Self(base))
    }

    /// Returns the raw base.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Parses `value` in this base into an exact big integer.
    ///
    /// Surrounding whitespace is trimmed. Characters are consumed most
    /// significant first, accumulating `result * base + digit` without ever
    /// leaving integer arithmetic. An empty string parses to zero.
    ///
    /// # Errors
    ///
    /// Returns `RadixError::InvalidDigit` for a non-alphanumeric character and
    /// `RadixError::DigitExceedsBase` for a digit not smaller than the base.
    pub fn parse(self, value: &str) -> Result<BigInt, RadixError> {
        let base = BigInt::from(self.0);
        value.trim().chars().try_fold(BigInt::zero(), |acc, ch| {
            let digit = digit_value(ch)?;
            if digit >= self.0 {
                return Err(RadixError::DigitExceedsBase {
                    ch,
                    digit,
                    base: self.0,
                });
            }
            Ok(acc * &base + digit)
        })
    }
}

impl TryFrom<i64> for Radix {
    type Error = RadixError;

    fn try_from(base: i64) -> Result<Self, Self::Error> {
        let narrowed = u32::try_from(base).map_err(|_| RadixError::BaseUnsupported { base })?;
        Self::new(narrowed)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a single character to its digit value.
///
/// `0`-`9` give 0-9, `a`-`z` and `A`-`Z` give 10-35. Anything else, including
/// non-ASCII letters, is rejected.
///
/// # Errors
///
/// Returns `RadixError::InvalidDigit` if `ch` is not an ASCII alphanumeric.
pub fn digit_value(ch: char) -> Result<u32, RadixError> {
    ch.to_digit(MAX_BASE).ok_or(RadixError::InvalidDigit { ch })
}

/// Parses `value` written in `base` into an exact big integer.
///
/// The base is validated before any digit is looked at.
///
/// # Errors
///
/// See [`Radix::new`] and [`Radix::parse`].
pub fn parse(value: &str, base: u32) -> Result<BigInt, RadixError> {
    Radix::new(base)?.parse(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Num;
    use proptest::prelude::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(parse("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(parse("z", 36).unwrap(), BigInt::from(35));
        assert_eq!(parse("10", 2).unwrap(), BigInt::from(2));
        assert_eq!(parse("0", 10).unwrap(), BigInt::from(0));
        assert_eq!(parse("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(parse("213", 4).unwrap(), BigInt::from(39));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse("FF", 16).unwrap(), parse("ff", 16).unwrap());
        assert_eq!(parse("aBcD", 16).unwrap(), BigInt::from(0xabcd));
        assert_eq!(parse("Z", 36).unwrap(), BigInt::from(35));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse("  42\n", 10).unwrap(), BigInt::from(42));
        assert_eq!(parse("\t101 ", 2).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse("", 10).unwrap(), BigInt::zero());
        assert_eq!(parse("   ", 7).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_digit_exceeds_base() {
        assert_eq!(
            parse("g", 16),
            Err(RadixError::DigitExceedsBase {
                ch: 'g',
                digit: 16,
                base: 16
            })
        );
        assert!(matches!(
            parse("102", 2),
            Err(RadixError::DigitExceedsBase { ch: '2', .. })
        ));
    }

    #[test]
    fn test_base_unsupported() {
        assert_eq!(
            parse("5", 1),
            Err(RadixError::BaseUnsupported { base: 1 })
        );
        assert_eq!(
            parse("5", 37),
            Err(RadixError::BaseUnsupported { base: 37 })
        );
        // base is checked before digits
        assert_eq!(
            parse("#", 0),
            Err(RadixError::BaseUnsupported { base: 0 })
        );
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(parse("#", 10), Err(RadixError::InvalidDigit { ch: '#' }));
        assert_eq!(parse("1-2", 10), Err(RadixError::InvalidDigit { ch: '-' }));
        assert_eq!(parse("1 2", 10), Err(RadixError::InvalidDigit { ch: ' ' }));
        assert_eq!(parse("é", 36), Err(RadixError::InvalidDigit { ch: 'é' }));
    }

    #[test]
    fn test_radix_try_from_i64() {
        assert_eq!(Radix::try_from(16i64).unwrap().get(), 16);
        assert_eq!(
            Radix::try_from(-3i64),
            Err(RadixError::BaseUnsupported { base: -3 })
        );
        assert_eq!(
            Radix::try_from(1i64 << 40),
            Err(RadixError::BaseUnsupported { base: 1 << 40 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse("g", 16).unwrap_err().to_string(),
            "Digit 'g' invalid for base 16"
        );
        assert_eq!(
            parse("5", 37).unwrap_err().to_string(),
            "Base 37 not supported (must be 2..36)"
        );
        assert_eq!(
            parse("#", 10).unwrap_err().to_string(),
            "Invalid digit '#'"
        );
    }

    #[test]
    fn test_large_hex_is_exact() {
        let value = "e1b5e05623d881f5c2f03fa1dcd6f2de6a9c79a3e01a9b3d5f";
        assert_eq!(value.len(), 50);

        let parsed = parse(value, 16).unwrap();
        let reference = BigInt::parse_bytes(value.as_bytes(), 16).unwrap();
        assert_eq!(parsed, reference);
        assert!(parsed.bits() > 190);
    }

    fn digits(base: u32) -> impl Strategy<Value = String> {
        let alphabet: Vec<char> = (0..base)
            .filter_map(|d| std::char::from_digit(d, base))
            .collect();
        proptest::collection::vec(proptest::sample::select(alphabet), 1..80)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn base_and_digits() -> impl Strategy<Value = (u32, String)> {
        (MIN_BASE..=MAX_BASE).prop_flat_map(|base| (Just(base), digits(base)))
    }

    proptest! {
        #[test]
        fn parse_matches_num_bigint((base, value) in base_and_digits()) {
            let reference = BigInt::from_str_radix(&value, base).unwrap();
            prop_assert_eq!(parse(&value, base).unwrap(), reference.clone());
            prop_assert_eq!(parse(&value.to_uppercase(), base).unwrap(), reference);
        }

        #[test]
        fn out_of_range_base_is_rejected(base in 37u32..10_000) {
            prop_assert_eq!(
                parse("1", base),
                Err(RadixError::BaseUnsupported { base: base.into() })
            );
        }
    }
}
