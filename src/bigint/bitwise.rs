// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements bitwise operations.
//!
//! `BigInt` stores values as sign and magnitude, not two's complement, so AND/OR/XOR/NOT
//! are built from the magnitude-only digit ops below plus the identity that relates a
//! negative value to its magnitude: `-n` reads, in infinite-precision two's complement,
//! as `NOT(n - 1)`. Each binary operator therefore dispatches on the sign of its two
//! operands and rewrites the negative side(s) using that identity before combining
//! magnitudes, then negates back if needed.

use super::bigint_core::{BigInt, Sign, MAX_LENGTH_BITS};
use super::bigint_slice::BigUintSlice;
use super::bigint_vec::DigitVec;
use super::len::len_digits;
use crate::error::BigIntError;
use std::ops::{BitAnd, BitOr, BitXor, Not};

fn magnitude(a: &BigInt) -> BigInt {
    if a.is_sign_negative() {
        -a.clone()
    } else {
        a.clone()
    }
}

fn and_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let len = a.len().min(b.len());
    let mut result: DigitVec = (0..len).map(|i| a[i] & b[i]).collect();
    result.truncate(len_digits(&result));
    result
}

fn or_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let len = a.len().max(b.len());
    let mut result: DigitVec = (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) | b.get(i).copied().unwrap_or(0))
        .collect();
    result.truncate(len_digits(&result));
    result
}

fn xor_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let len = a.len().max(b.len());
    let mut result: DigitVec = (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) ^ b.get(i).copied().unwrap_or(0))
        .collect();
    result.truncate(len_digits(&result));
    result
}

/// `a AND (NOT b)`, both nonnegative magnitudes.
fn and_not_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let mut result: DigitVec = a
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit & !b.get(i).copied().unwrap_or(0))
        .collect();
    result.truncate(len_digits(&result));
    result
}

fn positive(digits: DigitVec) -> BigInt {
    let len = digits.len();
    BigInt::new(digits, len, Sign::Positive)
}

impl<'a, 'b> BitAnd<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &'b BigInt) -> BigInt {
        match (self.is_sign_negative(), rhs.is_sign_negative()) {
            (false, false) => positive(and_digits(self.as_digits(), rhs.as_digits())),
            (false, true) => {
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                positive(and_not_digits(self.as_digits(), y_minus_1.as_digits()))
            }
            (true, false) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                positive(and_not_digits(rhs.as_digits(), x_minus_1.as_digits()))
            }
            (true, true) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                let combined = positive(or_digits(x_minus_1.as_digits(), y_minus_1.as_digits()));
                -(combined + BigInt::one())
            }
        }
    }
}

impl BitAnd for BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: Self) -> Self::Output {
        (&self).bitand(&rhs)
    }
}

impl<'a, 'b> BitOr<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &'b BigInt) -> BigInt {
        match (self.is_sign_negative(), rhs.is_sign_negative()) {
            (false, false) => positive(or_digits(self.as_digits(), rhs.as_digits())),
            (false, true) => {
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                let combined = positive(and_not_digits(y_minus_1.as_digits(), self.as_digits()));
                -(combined + BigInt::one())
            }
            (true, false) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                let combined = positive(and_not_digits(x_minus_1.as_digits(), rhs.as_digits()));
                -(combined + BigInt::one())
            }
            (true, true) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                let combined = positive(and_digits(x_minus_1.as_digits(), y_minus_1.as_digits()));
                -(combined + BigInt::one())
            }
        }
    }
}

impl BitOr for BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: Self) -> Self::Output {
        (&self).bitor(&rhs)
    }
}

impl<'a, 'b> BitXor<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &'b BigInt) -> BigInt {
        match (self.is_sign_negative(), rhs.is_sign_negative()) {
            (false, false) => positive(xor_digits(self.as_digits(), rhs.as_digits())),
            (false, true) => {
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                let combined = positive(xor_digits(self.as_digits(), y_minus_1.as_digits()));
                -(combined + BigInt::one())
            }
            (true, false) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                let combined = positive(xor_digits(x_minus_1.as_digits(), rhs.as_digits()));
                -(combined + BigInt::one())
            }
            (true, true) => {
                let x_minus_1 = magnitude(self) - BigInt::one();
                let y_minus_1 = magnitude(rhs) - BigInt::one();
                positive(xor_digits(x_minus_1.as_digits(), y_minus_1.as_digits()))
            }
        }
    }
}

impl BitXor for BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: Self) -> Self::Output {
        (&self).bitxor(&rhs)
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    /// `NOT x == -(x + 1)`.
    fn not(self) -> BigInt {
        -(self.clone() + BigInt::one())
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        -(self + BigInt::one())
    }
}

impl BigInt {
    /// Wraps `self` into an unsigned integer of `bits` width, as if truncating its
    /// two's-complement representation: returns a value in `[0, 2^bits)`.
    pub fn as_uint_n(&self, bits: usize) -> Result<BigInt, BigIntError> {
        if bits == 0 {
            return Ok(BigInt::zero());
        }
        if bits > MAX_LENGTH_BITS {
            return Err(BigIntError::range("bit width is too large"));
        }

        let modulus = BigInt::one() << bits;
        let mut remainder = self % &modulus;
        if remainder.is_sign_negative() {
            remainder = remainder + modulus;
        }
        Ok(remainder)
    }

    /// Wraps `self` into a signed integer of `bits` width, as if truncating its
    /// two's-complement representation into the range `[-2^(bits-1), 2^(bits-1))`.
    pub fn as_int_n(&self, bits: usize) -> Result<BigInt, BigIntError> {
        if bits == 0 {
            return Ok(BigInt::zero());
        }

        let unsigned = self.as_uint_n(bits)?;
        let half = BigInt::one() << (bits - 1);
        if unsigned >= half {
            Ok(unsigned - (BigInt::one() << bits))
        } else {
            Ok(unsigned)
        }
    }
}
