// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mixed-type dispatch: the abstract-equality/abstract-relational coercion a
//! dynamically-typed host performs before an arithmetic or comparison operator
//! reaches the numeric core, applied here to an [`Operand`] that wraps either a
//! `BigInt`, a host `f64`, or an owned `String`.

use super::bigint_core::BigInt;
use crate::error::BigIntError;
use std::cmp::Ordering;

/// One side of a heterogeneous `add`/`eq`/`cmp` dispatch.
#[derive(Clone, Debug)]
pub enum Operand {
    BigIntValue(BigInt),
    Number(f64),
    Str(String),
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::BigIntValue(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl Operand {
    fn to_display_string(&self) -> String {
        match self {
            Operand::BigIntValue(big) => big.to_string(),
            Operand::Number(n) => n.to_string(),
            Operand::Str(s) => s.clone(),
        }
    }
}

/// Implements `a + b` for heterogeneous operands.
///
/// String + anything concatenates by string representation. Big + Number is a
/// [`BigIntError::TypeError`] (mixing BigInt and other types is never implicitly
/// coerced). Big + Big and Number + Number delegate to their native operator.
pub fn add(a: &Operand, b: &Operand) -> Result<Operand, BigIntError> {
    match (a, b) {
        (Operand::Str(_), _) | (_, Operand::Str(_)) => {
            Ok(Operand::Str(format!("{}{}", a.to_display_string(), b.to_display_string())))
        }
        (Operand::BigIntValue(x), Operand::BigIntValue(y)) => {
            Ok(Operand::BigIntValue(x + y))
        }
        (Operand::Number(x), Operand::Number(y)) => Ok(Operand::Number(x + y)),
        (Operand::BigIntValue(_), Operand::Number(_))
        | (Operand::Number(_), Operand::BigIntValue(_)) => {
            Err(BigIntError::type_error("cannot mix BigInt and other types"))
        }
    }
}

/// Implements abstract equality (`==`) for heterogeneous operands.
pub fn eq(a: &Operand, b: &Operand) -> bool {
    cmp(a, b) == Some(Ordering::Equal)
}

/// Implements abstract inequality (`!=`) for heterogeneous operands.
pub fn ne(a: &Operand, b: &Operand) -> bool {
    !eq(a, b)
}

/// Implements the abstract relational comparison underlying `<`, `<=`, `>`, `>=`.
///
/// Strings compare by codepoint. A big value and a number compare via the
/// big-vs-`f64` bridge ([`BigInt::partial_cmp_f64`]); `NaN` makes every comparison
/// incomparable (`None`), matching IEEE 754 and the host coercion rules this
/// mirrors. Reversing operand order and negating the result recovers `>`/`>=`
/// from `</<=` without a separate code path.
pub fn cmp(a: &Operand, b: &Operand) -> Option<Ordering> {
    match (a, b) {
        (Operand::Str(x), Operand::Str(y)) => Some(x.as_bytes().cmp(y.as_bytes())),
        (Operand::BigIntValue(x), Operand::BigIntValue(y)) => Some(x.cmp(y)),
        (Operand::Number(x), Operand::Number(y)) => x.partial_cmp(y),
        (Operand::BigIntValue(x), Operand::Number(y)) => x.partial_cmp_f64(*y),
        (Operand::Number(x), Operand::BigIntValue(y)) => {
            y.partial_cmp_f64(*x).map(Ordering::reverse)
        }
        (Operand::Str(s), other) | (other, Operand::Str(s)) => {
            // A string compared against a number or big value is compared by
            // its own codepoints against the other side's string rendering.
            let other_str = other.to_display_string();
            let ordering = s.as_bytes().cmp(other_str.as_bytes());
            Some(if matches!(a, Operand::Str(_)) {
                ordering
            } else {
                ordering.reverse()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> Operand {
        Operand::BigIntValue(BigInt::from(n))
    }

    #[test]
    fn test_add_strings() {
        let a = Operand::Str("foo".to_string());
        let b = big(1);
        match add(&a, &b).unwrap() {
            Operand::Str(s) => assert_eq!(s, "foo1"),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_add_big_big() {
        match add(&big(1), &big(2)).unwrap() {
            Operand::BigIntValue(n) => assert_eq!(n, BigInt::from(3)),
            _ => panic!("expected big"),
        }
    }

    #[test]
    fn test_add_number_number() {
        let a = Operand::Number(1.5);
        let b = Operand::Number(2.5);
        match add(&a, &b).unwrap() {
            Operand::Number(n) => assert_eq!(n, 4.0),
            _ => panic!("expected number"),
        }
    }

    #[test]
    fn test_add_big_number_is_type_error() {
        let a = big(1);
        let b = Operand::Number(2.0);
        assert!(matches!(add(&a, &b), Err(BigIntError::TypeError(_))));
    }

    #[test]
    fn test_eq_big_number() {
        let a = big(5);
        let b = Operand::Number(5.0);
        assert!(eq(&a, &b));
        assert!(!ne(&a, &b));
    }

    #[test]
    fn test_cmp_big_number_reversed() {
        let a = big(5);
        let b = Operand::Number(6.0);
        assert_eq!(cmp(&a, &b), Some(Ordering::Less));
        assert_eq!(cmp(&b, &a), Some(Ordering::Greater));
    }

    #[test]
    fn test_cmp_nan_is_incomparable() {
        let a = big(5);
        let b = Operand::Number(f64::NAN);
        assert_eq!(cmp(&a, &b), None);
        assert!(!eq(&a, &b));
    }

    #[test]
    fn test_cmp_strings_by_codepoint() {
        let a = Operand::Str("abc".to_string());
        let b = Operand::Str("abd".to_string());
        assert_eq!(cmp(&a, &b), Some(Ordering::Less));
    }
}
