// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parses and emits `BigInt` values in bases 2 through 36.
//!
//! Bases that are powers of two pack/unpack bits directly (each string digit maps to
//! a fixed-width bit group, no arithmetic needed). Other bases fall back to
//! multiply-accumulate for parsing and repeated division for emission, adapted from
//! the approach `num-bigint` uses for its general-radix conversions.

use super::bigint_core::{BigInt, Sign};
use super::bigint_vec::DigitVec;
use super::digit::Digit;
use super::len::len_digits;
use crate::error::BigIntError;

fn digit_value(c: u8, radix: u32) -> Result<u32, BigIntError> {
    (c as char)
        .to_digit(radix)
        .ok_or_else(|| BigIntError::syntax(format!("invalid digit '{}' for radix {radix}", c as char)))
}

fn bits_to_digits(bits: &[bool]) -> (DigitVec, usize) {
    if bits.is_empty() {
        return (vec![0], 1);
    }

    let digit_bits = Digit::BITS as usize;
    let digits_len = (bits.len() + digit_bits - 1) / digit_bits;
    let mut digits = vec![0 as Digit; digits_len];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            digits[i / digit_bits] |= 1 << (i % digit_bits);
        }
    }

    let len = len_digits(&digits);
    (digits, len)
}

fn parse_power_of_two(s: &str, radix: u32) -> Result<(DigitVec, usize), BigIntError> {
    let bits_per_digit = radix.trailing_zeros() as usize;
    let mut bits = Vec::with_capacity(s.len() * bits_per_digit);

    // The rightmost character is the least significant digit.
    for &c in s.as_bytes().iter().rev() {
        let value = digit_value(c, radix)?;
        for j in 0..bits_per_digit {
            bits.push((value >> j) & 1 == 1);
        }
    }

    Ok(bits_to_digits(&bits))
}

fn parse_general_radix(s: &str, radix: u32) -> Result<(DigitVec, usize), BigIntError> {
    let radix_bigint = BigInt::from(radix as u128);
    let mut result = BigInt::zero();

    for &c in s.as_bytes() {
        let value = digit_value(c, radix)?;
        result = &result * &radix_bigint + BigInt::from(value as u128);
    }

    let digits_len = result.digits_len;
    Ok((result.digits_storage, digits_len))
}

fn to_str_power_of_two(a: &BigInt, radix: u32) -> String {
    let bits_per_digit = radix.trailing_zeros() as usize;
    let bits = a.le_bits();

    let mut chars: Vec<char> = bits
        .chunks(bits_per_digit)
        .map(|chunk| {
            let mut value: u32 = 0;
            for (j, &bit) in chunk.iter().enumerate() {
                if bit {
                    value |= 1 << j;
                }
            }
            std::char::from_digit(value, radix).unwrap()
        })
        .collect();

    chars.reverse();
    chars.into_iter().collect()
}

fn to_str_general_radix(a: &BigInt, radix: u32) -> String {
    let radix_bigint = BigInt::from(radix as u128);
    let mut n = a.clone();
    let mut chars = Vec::new();

    while !n.is_zero() {
        let remainder = &n % &radix_bigint;
        let digit_value = remainder.as_digits()[0] as u32;
        chars.push(std::char::from_digit(digit_value, radix).unwrap());
        n = &n / &radix_bigint;
    }

    chars.reverse();
    chars.into_iter().collect()
}

fn strip_prefix_for_radix(s: &str, radix: u32) -> &str {
    if radix == 16 {
        s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
    } else {
        s
    }
}

/// Splits an auto-detected `0x`/`0o`/`0b` prefix off `s`, defaulting to radix 10.
fn detect_radix_prefix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &s[2..]),
            b'o' | b'O' => return (8, &s[2..]),
            b'b' | b'B' => return (2, &s[2..]),
            _ => {}
        }
    }
    (10, s)
}

fn parse_sign(s: &str) -> (Sign, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (Sign::Negative, &s[1..]),
        Some(b'+') => (Sign::Positive, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

fn parse_magnitude(digits_str: &str, radix: u32) -> Result<(DigitVec, usize), BigIntError> {
    if digits_str.is_empty() {
        return Err(BigIntError::syntax("empty digit sequence"));
    }

    if radix.is_power_of_two() {
        parse_power_of_two(digits_str, radix)
    } else {
        parse_general_radix(digits_str, radix)
    }
}

impl BigInt {
    /// Parses `src` as a `BigInt` in the given `radix` (2..=36).
    ///
    /// An optional leading `+`/`-` sign is accepted; surrounding whitespace is
    /// trimmed. When `radix` is 16, an optional `0x`/`0X` prefix is also accepted.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<BigInt, BigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(BigIntError::range("radix must be between 2 and 36"));
        }

        let s = src.trim_matches(char::is_whitespace);
        let (sign, digits_str) = parse_sign(s);
        let digits_str = strip_prefix_for_radix(digits_str, radix);

        let (digits, digits_len) = parse_magnitude(digits_str, radix)?;
        Ok(BigInt::new(digits, digits_len, sign))
    }

    /// Parses `src`, auto-detecting the radix from a `0x`/`0o`/`0b` prefix and
    /// falling back to decimal when none is present.
    ///
    /// An optional leading `+`/`-` sign is accepted before the prefix; surrounding
    /// whitespace is trimmed.
    pub fn parse_bytes(src: &str) -> Result<BigInt, BigIntError> {
        let s = src.trim_matches(char::is_whitespace);
        let (sign, rest) = parse_sign(s);
        let (radix, digits_str) = detect_radix_prefix(rest);

        let (digits, digits_len) = parse_magnitude(digits_str, radix)?;
        Ok(BigInt::new(digits, digits_len, sign))
    }

    /// Returns the representation of `self` in the given `radix` (2..=36), with a
    /// leading `-` for negative values.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, BigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(BigIntError::range("radix must be between 2 and 36"));
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let magnitude = if self.is_sign_negative() {
            -self.clone()
        } else {
            self.clone()
        };

        let digits_str = if radix.is_power_of_two() {
            to_str_power_of_two(&magnitude, radix)
        } else {
            to_str_general_radix(&magnitude, radix)
        };

        Ok(if self.is_sign_negative() {
            format!("-{digits_str}")
        } else {
            digits_str
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::bigint::from_str_radix_naive;
    use crate::testing_tools::quickcheck::DecimalString;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_from_str_radix_basic() {
        assert_eq!(BigInt::from_str_radix("1010", 2).unwrap(), BigInt::from(10));
        assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(BigInt::from_str_radix("-ff", 16).unwrap(), -BigInt::from(255));
        assert_eq!(BigInt::from_str_radix("z", 36).unwrap(), BigInt::from(35));
        assert_eq!(BigInt::from_str_radix("  42  ", 10).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_from_str_radix_invalid() {
        assert!(BigInt::from_str_radix("12", 1).is_err());
        assert!(BigInt::from_str_radix("12", 37).is_err());
        assert!(BigInt::from_str_radix("", 10).is_err());
        assert!(BigInt::from_str_radix("12g", 16).is_err());
    }

    #[test]
    fn test_to_str_radix_basic() {
        assert_eq!(BigInt::from(10).to_str_radix(2).unwrap(), "1010");
        assert_eq!(BigInt::from(255).to_str_radix(16).unwrap(), "ff");
        assert_eq!((-BigInt::from(255)).to_str_radix(16).unwrap(), "-ff");
        assert_eq!(BigInt::zero().to_str_radix(10).unwrap(), "0");
    }

    #[test]
    fn test_parse_bytes_detects_prefix() {
        assert_eq!(BigInt::parse_bytes("0xff").unwrap(), BigInt::from(255));
        assert_eq!(BigInt::parse_bytes("0o17").unwrap(), BigInt::from(15));
        assert_eq!(BigInt::parse_bytes("0b1010").unwrap(), BigInt::from(10));
        assert_eq!(BigInt::parse_bytes("42").unwrap(), BigInt::from(42));
        assert_eq!(BigInt::parse_bytes("-0x2a").unwrap(), -BigInt::from(42));
        assert_eq!(BigInt::parse_bytes("  +0b101  ").unwrap(), BigInt::from(5));
        assert!(BigInt::parse_bytes("0xg").is_err());
    }

    #[quickcheck]
    fn round_trip_through_every_radix(n: i64) -> bool {
        let a = BigInt::from(n as i128);
        (2..=36).all(|radix| {
            let s = a.to_str_radix(radix).unwrap();
            BigInt::from_str_radix(&s, radix).unwrap() == a
        })
    }

    #[quickcheck]
    fn decimal_matches_naive_oracle(decimal: DecimalString) -> bool {
        let digits_only = decimal.0.trim_start_matches(['+', '-']);
        let expected = from_str_radix_naive(digits_only, 10);
        let expected = if decimal.0.starts_with('-') {
            -expected
        } else {
            expected
        };

        BigInt::from_str_radix(&decimal.0, 10).unwrap() == expected
    }
}
