// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::BigInt;
use super::bytes::{be_digits_to_be_bytes, bytes_to_hex};

impl BigInt {
    /// Returns the lowercase hexadecimal representation of this big integer,
    /// with a leading `-` for negative values.
    pub fn to_lower_hex(&self) -> String {
        // Reverses `digits`, for the hex representation is in big-endian order.
        let mut digits_be = self.as_digits().to_vec();
        digits_be.reverse();

        let bytes = be_digits_to_be_bytes(&digits_be);
        let hex = bytes_to_hex(&bytes);
        let hex = hex.trim_start_matches('0');
        let hex = if hex.is_empty() { "0" } else { hex };

        if self.is_sign_negative() && !self.is_zero() {
            format!("-{hex}")
        } else {
            hex.to_string()
        }
    }
}
