//! Arithmetic kernels of the math extension.
//!
//! Integer results wrap on 32-bit overflow. Operations that go through a
//! floating-point intermediate (`sqrt`, `pow`, `hyp`, `log`) truncate toward
//! zero with a saturating cast, so NaN becomes 0 and infinities clamp to
//! `i32::MIN`/`i32::MAX`. Domain errors such as the logarithm of a negative
//! number are not faults.

use crate::common::FaultKind;

/// `rs + rt`.
#[inline]
pub const fn plus(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `rs - rt`.
#[inline]
pub const fn minus(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Smaller of `rs` and `rt`.
#[inline]
pub fn min(a: i32, b: i32) -> i32 {
    a.min(b)
}

/// Larger of `rs` and `rt`.
#[inline]
pub fn max(a: i32, b: i32) -> i32 {
    a.max(b)
}

/// `(rs + rt) / 2`, truncating toward zero; the sum wraps before halving.
#[inline]
pub const fn mean(a: i32, b: i32) -> i32 {
    a.wrapping_add(b) / 2
}

/// `rs * rt`.
#[inline]
pub const fn mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `rs / rt`, truncating toward zero. `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Errors
///
/// Returns [`FaultKind::DivisionByZero`] when `rt` is zero.
#[inline]
pub fn div(a: i32, b: i32) -> Result<i32, FaultKind> {
    if b == 0 {
        Err(FaultKind::DivisionByZero)
    } else {
        Ok(a.wrapping_div(b))
    }
}

/// `-rs`.
#[inline]
pub const fn neg(a: i32) -> i32 {
    a.wrapping_neg()
}

/// `rd + 1`.
#[inline]
pub const fn inc(a: i32) -> i32 {
    a.wrapping_add(1)
}

/// `rs * rs`.
#[inline]
pub const fn sqr(a: i32) -> i32 {
    a.wrapping_mul(a)
}

/// Truncated square root; negative inputs give 0.
#[inline]
pub fn sqrt(a: i32) -> i32 {
    f64::from(a).sqrt() as i32
}

/// `rs` raised to `rt`, truncated; negative exponents truncate to 0 unless
/// the base is ±1.
#[inline]
pub fn pow(a: i32, b: i32) -> i32 {
    f64::from(a).powf(f64::from(b)) as i32
}

/// Sum of every integer from `rs` to `rt` inclusive, in either direction.
pub const fn sum(a: i32, b: i32) -> i32 {
    let (lo, hi) = if a <= b { (a as i128, b as i128) } else { (b as i128, a as i128) };
    // (lo + hi) * n is always even, so the halving is exact.
    ((lo + hi) * (hi - lo + 1) / 2) as i32
}

/// Product of every integer from `rs` to `rt` inclusive, in either direction.
pub fn prod(a: i32, b: i32) -> i32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    product(i64::from(lo), i64::from(hi))
}

/// `rs!`; 1 for `rs < 1`.
pub fn fact(a: i32) -> i32 {
    product(1, i64::from(a))
}

/// Average of `rs` and `rt`; same arithmetic as [`mean`].
#[inline]
pub const fn avg(a: i32, b: i32) -> i32 {
    mean(a, b)
}

/// `|rs|`. `abs(i32::MIN)` wraps to `i32::MIN`.
#[inline]
pub const fn abs(a: i32) -> i32 {
    a.wrapping_abs()
}

/// Truncated length of the hypotenuse with legs `rs` and `rt`.
#[inline]
pub fn hyp(a: i32, b: i32) -> i32 {
    let (x, y) = (f64::from(a), f64::from(b));
    (x * x + y * y).sqrt() as i32
}

/// Greatest common divisor of `|rs|` and `|rt|`.
///
/// Matches repeated subtraction of the smaller value from the larger, but
/// terminates when one operand is zero: `gcd(n, 0)` is `|n|`.
pub const fn gcd(a: i32, b: i32) -> i32 {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x as i32
}

/// Truncated logarithm of `rs` in base `rt`, computed as `ln(rs) / ln(rt)`.
#[inline]
pub fn log(value: i32, base: i32) -> i32 {
    (f64::from(value).ln() / f64::from(base).ln()) as i32
}

/// Wrapping product of `lo..=hi`; 1 for an empty range.
///
/// Any 34 consecutive non-zero integers contain at least 32 factors of two,
/// so the accumulator reaches zero quickly and the loop stops there.
fn product(lo: i64, hi: i64) -> i32 {
    let mut acc: i32 = 1;
    let mut i = lo;
    while i <= hi && acc != 0 {
        acc = acc.wrapping_mul(i as i32);
        i += 1;
    }
    acc
}
