//! Seed values.
//!
//! Generator state lives modulo 2^64, so every seed conversion reduces its
//! input the same way: integers wider than 64 bits keep their low 64 bits and
//! negative integers wrap in two's complement. Seed text of any length is
//! folded digit by digit with wrapping arithmetic, which is exact modulo 2^64.

use std::fmt;
use std::str::FromStr;

use crate::clock::Clock;
use crate::error::RarityError;

/// A generator seed, already reduced modulo 2^64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Creates a seed from a raw 64-bit value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a seed from the clock's Unix time in milliseconds.
    ///
    /// Seeds derived this way differ between runs; pass an explicit seed
    /// wherever reproducibility matters.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::from(clock.unix_millis())
    }

    /// Parses integer text in the given radix (2 to 36).
    ///
    /// Accepts an optional leading sign and case-insensitive digits. In
    /// radix 10 a trailing `n` is ignored and `<int>e<exp>` exponent notation
    /// is accepted; a negative exponent truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidSeed` if the radix is out of range or the
    /// text is not an integer in that radix.
    pub fn parse_radix(text: &str, radix: u32) -> Result<Self, RarityError> {
        if !(2..=36).contains(&radix) {
            return Err(RarityError::InvalidSeed(format!(
                "radix must be between 2 and 36, got {radix}"
            )));
        }

        let invalid =
            || RarityError::InvalidSeed(format!("`{text}` is not a base-{radix} integer"));
        let (negative, body) = split_sign(text.trim());

        let magnitude = if radix == 10 {
            let body = body.strip_suffix('n').unwrap_or(body);
            match body.split_once(['e', 'E']) {
                Some((mantissa, exponent)) => {
                    scale_by_power_of_ten(mantissa, exponent).ok_or_else(invalid)?
                }
                None => fold_digits(body, radix).ok_or_else(invalid)?,
            }
        } else {
            fold_digits(body, radix).ok_or_else(invalid)?
        };

        Ok(Self(apply_sign(magnitude, negative)))
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<i64> for Seed {
    #[allow(clippy::cast_sign_loss)]
    fn from(value: i64) -> Self {
        Self(value as u64)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u128> for Seed {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self(value as u64)
    }
}

impl From<i128> for Seed {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(value: i128) -> Self {
        Self(value as u64)
    }
}

impl FromStr for Seed {
    type Err = RarityError;

    /// Parses decimal text, or hexadecimal, octal and binary text with a
    /// `0x`, `0o` or `0b` prefix after the optional sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = split_sign(trimmed);
        let radix = match body.get(..2) {
            Some("0x" | "0X") => 16,
            Some("0o" | "0O") => 8,
            Some("0b" | "0B") => 2,
            _ => return Self::parse_radix(trimmed, 10),
        };

        let digits = &body[2..];
        if digits.starts_with(['+', '-']) {
            return Err(RarityError::InvalidSeed(format!(
                "`{s}` has a sign after its radix prefix"
            )));
        }
        let seed = Self::parse_radix(digits, radix)?;
        Ok(Self(apply_sign(seed.0, negative)))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn apply_sign(magnitude: u64, negative: bool) -> u64 {
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Folds digits into a value modulo 2^64. Returns `None` for empty input or
/// any character that is not a digit in `radix`.
fn fold_digits(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(radix)?;
        Some(acc.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(digit)))
    })
}

/// Evaluates `mantissa * 10^exponent` modulo 2^64 for decimal digit strings.
///
/// A negative exponent drops trailing mantissa digits, which is exact
/// truncating division. For exponents of 64 and above, `10^exponent` is a
/// multiple of 2^64 and the result is zero.
fn scale_by_power_of_ten(mantissa: &str, exponent: &str) -> Option<u64> {
    let mantissa_value = fold_digits(mantissa, 10)?;
    let (negative_exponent, exponent_digits) = split_sign(exponent);
    if exponent_digits.is_empty() || !exponent_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digit strings too long for usize are larger than any mantissa and any
    // exponent that leaves a non-zero residue.
    let exponent_value = exponent_digits.parse::<usize>().unwrap_or(usize::MAX);

    if negative_exponent {
        let kept = mantissa.len().saturating_sub(exponent_value);
        return Some(fold_digits(&mantissa[..kept], 10).unwrap_or(0));
    }

    match u32::try_from(exponent_value) {
        Ok(power) if power < 64 => Some(mantissa_value.wrapping_mul(10u64.wrapping_pow(power))),
        _ => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_conversions_wrap_in_twos_complement() {
        assert_eq!(Seed::from(-1i64).value(), u64::MAX);
        assert_eq!(Seed::from(-1i32).value(), u64::MAX);
        assert_eq!(Seed::from(-2i128).value(), u64::MAX - 1);
    }

    #[test]
    fn test_wide_conversions_keep_low_64_bits() {
        let wide: u128 = (7u128 << 64) | 42;
        assert_eq!(Seed::from(wide).value(), 42);
    }

    #[test]
    fn test_parse_decimal_beyond_float_precision() {
        // 2^53 + 1 is not representable as an f64.
        let seed: Seed = "9007199254740993".parse().unwrap();
        assert_eq!(seed.value(), 9_007_199_254_740_993);
    }

    #[test]
    fn test_parse_decimal_wider_than_64_bits_reduces_modulo() {
        // 2^64 + 5
        let seed: Seed = "18446744073709551621".parse().unwrap();
        assert_eq!(seed.value(), 5);
    }

    #[test]
    fn test_parse_negative_decimal_wraps() {
        let seed: Seed = "-1".parse().unwrap();
        assert_eq!(seed.value(), u64::MAX);
    }

    #[test]
    fn test_parse_ignores_whitespace_plus_sign_and_bigint_suffix() {
        let seed: Seed = "  +1234n ".parse().unwrap();
        assert_eq!(seed.value(), 1234);
    }

    #[test]
    fn test_parse_exponent_notation() {
        assert_eq!("12e3".parse::<Seed>().unwrap().value(), 12_000);
        assert_eq!("12E-1".parse::<Seed>().unwrap().value(), 1);
        assert_eq!("-19e-1".parse::<Seed>().unwrap(), Seed::from(-1i64));
        assert_eq!("5e-4".parse::<Seed>().unwrap().value(), 0);
        assert_eq!("1e64".parse::<Seed>().unwrap().value(), 0);
        assert_eq!(
            "3e99999999999999999999999".parse::<Seed>().unwrap().value(),
            0
        );
    }

    #[test]
    fn test_parse_exponent_reduces_modulo() {
        // 10^20 mod 2^64
        let expected = 10u64.wrapping_pow(20);
        assert_eq!("1e20".parse::<Seed>().unwrap().value(), expected);
    }

    #[test]
    fn test_parse_radix_prefixes() {
        assert_eq!("0xff".parse::<Seed>().unwrap().value(), 255);
        assert_eq!("0XFF".parse::<Seed>().unwrap().value(), 255);
        assert_eq!("0o17".parse::<Seed>().unwrap().value(), 15);
        assert_eq!("0b101".parse::<Seed>().unwrap().value(), 5);
        assert_eq!("-0x1".parse::<Seed>().unwrap().value(), u64::MAX);
    }

    #[test]
    fn test_parse_radix_is_case_insensitive() {
        assert_eq!(Seed::parse_radix("zZ", 36).unwrap().value(), 35 * 36 + 35);
    }

    #[test]
    fn test_parse_radix_rejects_out_of_range_radix() {
        assert!(matches!(
            Seed::parse_radix("1", 1),
            Err(RarityError::InvalidSeed(_))
        ));
        assert!(matches!(
            Seed::parse_radix("1", 37),
            Err(RarityError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for text in ["", "   ", "-", "abc", "12abc", "1.5", "1e", "e5", "0x", "0x-1"] {
            assert!(
                matches!(text.parse::<Seed>(), Err(RarityError::InvalidSeed(_))),
                "expected `{text}` to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_radix_rejects_digits_outside_radix() {
        assert!(Seed::parse_radix("102", 2).is_err());
    }

    #[test]
    fn test_display_prints_reduced_value() {
        assert_eq!(Seed::from(-1i64).to_string(), "18446744073709551615");
    }
}
