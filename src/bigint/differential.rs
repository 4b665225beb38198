//! Differential property tests: random operations on `BigInt` are checked
//! against `num_bigint::BigInt`'s result on the same inputs.

use super::bigint_core::BigInt;
use quickcheck_macros::quickcheck;

fn to_oracle(a: &BigInt) -> num_bigint::BigInt {
    num_bigint::BigInt::parse_bytes(a.to_lower_hex().trim_start_matches('-').as_bytes(), 16)
        .map(|v| if a.is_sign_negative() { -v } else { v })
        .unwrap()
}

#[quickcheck]
fn add_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x + y)) == ox + oy
}

#[quickcheck]
fn sub_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x - y)) == ox - oy
}

#[quickcheck]
fn mul_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x * y)) == ox * oy
}

#[quickcheck]
fn div_rem_match_num_bigint(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x.clone() / y.clone())) == (&ox / &oy) && to_oracle(&(x % y)) == ox % oy
}

#[quickcheck]
fn shift_left_matches_num_bigint(a: i64, n: u8) -> bool {
    let n = (n & 0x3f) as usize;
    let x = BigInt::from(a);
    let ox = to_oracle(&x);
    to_oracle(&(x << n)) == ox << n
}

#[quickcheck]
fn shift_right_matches_num_bigint(a: i64, n: u8) -> bool {
    let n = (n & 0x3f) as usize;
    let x = BigInt::from(a);
    let ox = to_oracle(&x);
    to_oracle(&(x >> n)) == ox >> n
}

#[quickcheck]
fn bitand_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x & y)) == ox & oy
}

#[quickcheck]
fn bitor_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x | y)) == ox | oy
}

#[quickcheck]
fn bitxor_matches_num_bigint(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    to_oracle(&(x ^ y)) == ox ^ oy
}
