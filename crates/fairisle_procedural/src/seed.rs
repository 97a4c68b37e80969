//! # Seed Normalization
//!
//! Token seeds arrive as fixed-width integers, big integers, or numeric
//! strings. All of them collapse to one canonical value: the unsigned
//! magnitude reduced modulo 2^31 - 1.
//!
//! ## Determinism Guarantee
//!
//! `-5`, `5`, `"5"` and `"-0005"` are the same seed. Normalization never
//! fails for integers; only malformed text is rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::{SeedError, SeedResult};

/// Normalized token seed in `[0, 2^31 - 2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(u32);

impl Seed {
    /// Modulus shared with the PRNG (Mersenne prime 2^31 - 1).
    pub const MODULUS: u32 = 2_147_483_647;

    /// Offset added to the seed before it feeds the pattern PRNG.
    ///
    /// Issued artwork depends on this exact value.
    pub const PATTERN_OFFSET: u64 = 1000;

    /// Creates a seed from an unsigned integer.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self((raw % Self::MODULUS as u64) as u32)
    }

    /// Creates a seed from a signed integer (sign is discarded).
    #[inline]
    #[must_use]
    pub const fn from_signed(raw: i64) -> Self {
        Self::new(raw.unsigned_abs())
    }

    /// Creates a seed from a 128-bit unsigned integer.
    #[inline]
    #[must_use]
    pub const fn from_wide(raw: u128) -> Self {
        Self((raw % Self::MODULUS as u128) as u32)
    }

    /// Creates a seed from a 128-bit signed integer (sign is discarded).
    #[inline]
    #[must_use]
    pub const fn from_signed_wide(raw: i128) -> Self {
        Self::from_wide(raw.unsigned_abs())
    }

    /// Returns the normalized value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the value used to construct the pattern PRNG.
    #[inline]
    #[must_use]
    pub const fn pattern_seed(self) -> u64 {
        self.0 as u64 + Self::PATTERN_OFFSET
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Seed {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn from(raw: $t) -> Self {
                Self::new(raw as u64)
            }
        })*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Seed {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn from(raw: $t) -> Self {
                Self::from_signed(raw as i64)
            }
        })*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for Seed {
    #[inline]
    fn from(raw: u128) -> Self {
        Self::from_wide(raw)
    }
}

impl From<i128> for Seed {
    #[inline]
    fn from(raw: i128) -> Self {
        Self::from_signed_wide(raw)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// Parses a decimal seed of any length.
    ///
    /// Leading/trailing whitespace and a single leading `+` or `-` are
    /// accepted. Digits are folded modulo 2^31 - 1 as they are read, so
    /// arbitrarily long inputs never overflow.
    fn from_str(s: &str) -> SeedResult<Self> {
        let trimmed = s.trim();
        let (offset, digits) = match trimmed.as_bytes().first() {
            Some(b'+' | b'-') => (1, &trimmed[1..]),
            _ => (0, trimmed),
        };

        if digits.is_empty() {
            return Err(SeedError::Empty);
        }

        let modulus = u64::from(Self::MODULUS);
        let mut acc = 0u64;
        for (i, ch) in digits.char_indices() {
            let digit = ch.to_digit(10).ok_or(SeedError::InvalidDigit {
                found: ch,
                position: offset + i,
            })?;
            acc = (acc * 10 + u64::from(digit)) % modulus;
        }

        Ok(Self::new(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_discarded() {
        assert_eq!(Seed::from(-5i64), Seed::from(5u64));
        assert_eq!(Seed::from(i64::MIN), Seed::new(i64::MIN.unsigned_abs()));
    }

    #[test]
    fn test_modulus_wraps() {
        assert_eq!(Seed::new(u64::from(Seed::MODULUS)).value(), 0);
        assert_eq!(Seed::new(u64::from(Seed::MODULUS) + 7).value(), 7);
        assert_eq!(Seed::from(u128::from(Seed::MODULUS) * 3 + 11).value(), 11);
    }

    #[test]
    fn test_parse_matches_integer_path() {
        let parsed: Seed = "424242".parse().unwrap();
        assert_eq!(parsed, Seed::from(424_242u32));

        let negative: Seed = " -0005 ".parse().unwrap();
        assert_eq!(negative, Seed::from(5u8));

        let plus: Seed = "+17".parse().unwrap();
        assert_eq!(plus.value(), 17);
    }

    #[test]
    fn test_parse_big_integer() {
        // 2^64 = 18446744073709551616
        let big: Seed = "18446744073709551616".parse().unwrap();
        assert_eq!(big, Seed::from_wide(1u128 << 64));

        let huge = "9".repeat(200);
        assert!(huge.parse::<Seed>().is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Seed>(), Err(SeedError::Empty));
        assert_eq!("-".parse::<Seed>(), Err(SeedError::Empty));
        assert_eq!(
            "12a4".parse::<Seed>(),
            Err(SeedError::InvalidDigit { found: 'a', position: 2 })
        );
        assert_eq!(
            "-1.5".parse::<Seed>(),
            Err(SeedError::InvalidDigit { found: '.', position: 2 })
        );
    }

    #[test]
    fn test_pattern_seed_offset() {
        assert_eq!(Seed::new(0).pattern_seed(), 1000);
        assert_eq!(Seed::new(424_242).pattern_seed(), 425_242);
    }
}
