// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A naive, independently-written radix parser used only to cross-check the real
//! `BigInt::from_str_radix` (see `crate::bigint`) with a second implementation.

use crate::bigint::BigInt;

/// Parses an unsigned digit sequence `s` in the given `radix` via repeated
/// multiply-accumulate. Deliberately naive; not the implementation under test.
pub(crate) fn from_str_radix_naive(s: &str, radix: u8) -> BigInt {
    debug_assert!((2..=32).contains(&radix));

    fn char_to_int(c: u8) -> u8 {
        match c {
            48..=57 => c - 48,
            97..=122 => c - 87,
            65..=90 => c - 55,
            _ => panic!("invalid char"),
        }
    }

    let radix_bigint = BigInt::from(radix as u128);
    let mut result = BigInt::zero();
    for n in s.bytes().map(char_to_int) {
        if n > radix {
            panic!("digit greater than the specified radix")
        }

        result = result * &radix_bigint;
        result = result + BigInt::from(n as u128);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::quickcheck::HexString;
    use ::quickcheck_macros::quickcheck;

    #[quickcheck]
    fn from_str_radix_16_eq_from_hex(hex: HexString) -> bool {
        let a = BigInt::from_hex(&hex.0).unwrap();
        let b = from_str_radix_naive(&hex.0, 16);
        a == b
    }
}
