// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod add;
mod bigint_core;
mod bigint_display;
mod bigint_from;
mod bigint_into;
mod bigint_new;
mod bigint_slice;
mod bigint_vec;
mod bits;
mod bitwise;
mod bytes;
mod bytes64;
mod cmp;
#[cfg(test)]
mod differential;
mod digit;
pub mod dispatch;
mod divrem;
mod float;
mod helper_methods;
mod len;
mod mul;
mod neg;
mod pow;
mod radix;
mod shift;
mod sub;
mod zero;

pub use bigint_core::{BigInt, MAX_LENGTH, MAX_LENGTH_BITS};
pub use bytes64::{get_i64, get_u64, set_i64, set_u64, Endian};
pub use digit::{Digit, DIGIT_BYTES};
pub use dispatch::Operand;
