// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements exponentiation.

use super::bigint_core::BigInt;
use crate::error::BigIntError;

impl BigInt {
    /// Raises `self` to the power of `exponent`, using square-and-multiply.
    pub fn pow(&self, exponent: u32) -> BigInt {
        if exponent == 0 {
            return BigInt::one();
        }
        if self.is_zero() {
            return BigInt::zero();
        }

        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Raises `self` to the power of `exponent`.
    ///
    /// Returns [`BigIntError::RangeError`] if `exponent` is negative or does not fit
    /// in a `u32`.
    pub fn checked_pow(&self, exponent: &BigInt) -> Result<BigInt, BigIntError> {
        if exponent.is_sign_negative() {
            return Err(BigIntError::range("exponent must be non-negative"));
        }
        if exponent.bit_len() > u32::BITS as usize {
            return Err(BigIntError::range("exponent is too large"));
        }

        let mut exponent_value: u32 = 0;
        for (i, bit) in exponent.le_bits().iter().enumerate() {
            if *bit {
                exponent_value |= 1 << i;
            }
        }

        Ok(self.pow(exponent_value))
    }
}
