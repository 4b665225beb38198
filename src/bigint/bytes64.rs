// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reads and writes `BigInt` values as fixed-width 64-bit integers at a byte
//! offset, the way a host embeds a big integer into a flat buffer (mirroring
//! `DataView.getBigUint64`/`setBigUint64` and their signed counterparts).

use super::bigint_core::BigInt;
use crate::error::BigIntError;

/// Byte order used by [`get_u64`], [`set_u64`], [`get_i64`] and [`set_i64`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

fn window(bytes: &[u8], offset: usize) -> Result<[u8; 8], BigIntError> {
    bytes
        .get(offset..offset + 8)
        .ok_or_else(|| BigIntError::range("offset is out of bounds for an 8-byte read"))?
        .try_into()
        .map_err(|_| BigIntError::range("offset is out of bounds for an 8-byte read"))
}

impl BigInt {
    /// Returns `self` as a `u64`, or a [`BigIntError::RangeError`] if `self` is
    /// negative or does not fit.
    fn to_u64(&self) -> Result<u64, BigIntError> {
        if self.is_sign_negative() {
            return Err(BigIntError::range("value does not fit in an unsigned 64-bit integer"));
        }
        let digits = self.as_digits();
        if digits.len() > 1 {
            return Err(BigIntError::range("value does not fit in an unsigned 64-bit integer"));
        }
        Ok(digits[0])
    }

    /// Returns `self` as an `i64`, or a [`BigIntError::RangeError`] if it does not
    /// fit in the signed 64-bit range.
    fn to_i64(&self) -> Result<i64, BigIntError> {
        let digits = self.as_digits();
        if digits.len() > 1 {
            return Err(BigIntError::range("value does not fit in a signed 64-bit integer"));
        }
        let magnitude = digits[0];

        if self.is_sign_negative() {
            if magnitude <= i64::MAX as u64 {
                Ok(-(magnitude as i64))
            } else if magnitude == i64::MAX as u64 + 1 {
                Ok(i64::MIN)
            } else {
                Err(BigIntError::range("value does not fit in a signed 64-bit integer"))
            }
        } else if magnitude <= i64::MAX as u64 {
            Ok(magnitude as i64)
        } else {
            Err(BigIntError::range("value does not fit in a signed 64-bit integer"))
        }
    }
}

/// Reads 8 bytes at `offset` as an unsigned 64-bit `BigInt`.
pub fn get_u64(bytes: &[u8], offset: usize, endian: Endian) -> Result<BigInt, BigIntError> {
    let chunk = window(bytes, offset)?;
    let value = match endian {
        Endian::Big => u64::from_be_bytes(chunk),
        Endian::Little => u64::from_le_bytes(chunk),
    };
    Ok(BigInt::from(value))
}

/// Writes `value` as 8 bytes at `offset`, interpreted as unsigned.
pub fn set_u64(
    bytes: &mut [u8],
    offset: usize,
    value: &BigInt,
    endian: Endian,
) -> Result<(), BigIntError> {
    if offset + 8 > bytes.len() {
        return Err(BigIntError::range("offset is out of bounds for an 8-byte write"));
    }
    let value = value.to_u64()?;
    let encoded = match endian {
        Endian::Big => value.to_be_bytes(),
        Endian::Little => value.to_le_bytes(),
    };
    bytes[offset..offset + 8].copy_from_slice(&encoded);
    Ok(())
}

/// Reads 8 bytes at `offset` as a signed 64-bit `BigInt`.
pub fn get_i64(bytes: &[u8], offset: usize, endian: Endian) -> Result<BigInt, BigIntError> {
    let chunk = window(bytes, offset)?;
    let value = match endian {
        Endian::Big => i64::from_be_bytes(chunk),
        Endian::Little => i64::from_le_bytes(chunk),
    };
    Ok(BigInt::from(value))
}

/// Writes `value` as 8 bytes at `offset`, interpreted as signed two's complement.
pub fn set_i64(
    bytes: &mut [u8],
    offset: usize,
    value: &BigInt,
    endian: Endian,
) -> Result<(), BigIntError> {
    if offset + 8 > bytes.len() {
        return Err(BigIntError::range("offset is out of bounds for an 8-byte write"));
    }
    let value = value.to_i64()?;
    let encoded = match endian {
        Endian::Big => value.to_be_bytes(),
        Endian::Little => value.to_le_bytes(),
    };
    bytes[offset..offset + 8].copy_from_slice(&encoded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_u64() {
        let mut buf = [0u8; 16];
        set_u64(&mut buf, 4, &BigInt::from(u64::MAX - 1), Endian::Little).unwrap();
        assert_eq!(get_u64(&buf, 4, Endian::Little).unwrap(), BigInt::from(u64::MAX - 1));

        set_u64(&mut buf, 0, &BigInt::from(0x0102030405060708u64), Endian::Big).unwrap();
        assert_eq!(buf[0..8], [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_round_trip_i64() {
        let mut buf = [0u8; 8];
        set_i64(&mut buf, 0, &BigInt::from(-42), Endian::Big).unwrap();
        assert_eq!(get_i64(&buf, 0, Endian::Big).unwrap(), BigInt::from(-42));

        set_i64(&mut buf, 0, &BigInt::from(i64::MIN), Endian::Little).unwrap();
        assert_eq!(get_i64(&buf, 0, Endian::Little).unwrap(), BigInt::from(i64::MIN));
    }

    #[test]
    fn test_set_u64_rejects_negative_and_oversized() {
        let mut buf = [0u8; 8];
        assert!(set_u64(&mut buf, 0, &BigInt::from(-1), Endian::Big).is_err());
        assert!(set_u64(&mut buf, 0, &(BigInt::from(u64::MAX) + BigInt::one()), Endian::Big)
            .is_err());
    }

    #[test]
    fn test_set_i64_rejects_oversized() {
        let mut buf = [0u8; 8];
        assert!(set_i64(&mut buf, 0, &(BigInt::from(i64::MAX) + BigInt::one()), Endian::Big)
            .is_err());
        assert!(set_i64(&mut buf, 0, &(BigInt::from(i64::MIN) - BigInt::one()), Endian::Big)
            .is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let buf = [0u8; 4];
        assert!(get_u64(&buf, 0, Endian::Big).is_err());

        let mut buf = [0u8; 8];
        assert!(set_u64(&mut buf, 1, &BigInt::zero(), Endian::Big).is_err());
    }

    #[test]
    fn test_concrete_scenario_u64_max() {
        // DataViewSetBigUint64(view, 0, BigInt("18446744073709551615"), true) then
        // DataViewGetBigUint64 round-trips "18446744073709551615".
        let value = BigInt::from_str_radix("18446744073709551615", 10).unwrap();
        let mut buf = [0u8; 8];
        set_u64(&mut buf, 0, &value, Endian::Little).unwrap();
        let back = get_u64(&buf, 0, Endian::Little).unwrap();
        assert_eq!(back.to_string(), "18446744073709551615");
    }
}
