// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::BigInt;
use std::fmt;
use std::fmt::Display;

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = self
            .to_str_radix(10)
            .expect("10 is a valid radix");
        write!(f, "{decimal}")
    }
}

#[cfg(test)]
mod tests {
    use crate::bigint::BigInt;

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(BigInt::from(255).to_string(), "255");
        assert_eq!((-BigInt::from(255)).to_string(), "-255");
        assert_eq!(BigInt::zero().to_string(), "0");
    }
}
