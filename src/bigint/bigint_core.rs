// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigInt`.

use super::digit::Digit;

/// The maximum number of digits a `BigInt` may hold.
///
/// Chosen to match the distilled specification's `2^25` digit cap regardless of the
/// digit width in use; it bounds worst-case memory use for a single value
/// independent of how wide `Digit` is.
pub const MAX_LENGTH: usize = 1 << 25;

/// The maximum bit length a `BigInt` may hold, derived from [`MAX_LENGTH`] and the
/// digit width actually in use.
pub const MAX_LENGTH_BITS: usize = MAX_LENGTH * Digit::BITS as usize;

/// A big integer.
///
/// Digits are stored in little-endian order,
/// e.g., the "least significant digit" is stored at position 0.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) digits_storage: Vec<Digit>,
    pub(crate) digits_len: usize, // The length of digits stored in `digits_storage`
    pub(crate) sign: Sign,
}

impl BigInt {
    pub(crate) fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

/// Denotes the sign of a big integer.
///
/// A big integer, including 0, can be denoted as either positive or negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}
