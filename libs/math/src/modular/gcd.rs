//! Extended Euclidean algorithm.

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Bézout coefficients: `a * x + b * y = gcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bezout {
    /// The greatest common divisor.
    pub gcd: BigInt,

    /// The coefficient of `a`.
    pub x: BigInt,

    /// The coefficient of `b`.
    pub y: BigInt,
}

/// Computes the gcd of `a` and `b` along with their Bézout coefficients.
///
/// This does not happen modulo anything. Quotients and remainders use the truncating division of
/// [BigInt], so `b == (b / a) * a + b % a` holds throughout. When `a` is zero the result is
/// `(b, 0, 1)`.
///
/// The algorithm is the usual recursion `egcd(a, b) = (g, y1 - (b / a) * x1, x1)` where
/// `(g, x1, y1) = egcd(b % a, a)`, unrolled: quotients are collected on the way down and the
/// coefficients are substituted back on the way up.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> Bezout {
    let mut quotients = Vec::new();
    let mut a = a.clone();
    let mut b = b.clone();
    while !a.is_zero() {
        let quotient = &b / &a;
        let remainder = &b % &a;
        quotients.push(quotient);
        b = std::mem::replace(&mut a, remainder);
    }

    let mut x = BigInt::zero();
    let mut y = BigInt::one();
    for quotient in quotients.into_iter().rev() {
        let next_x = &y - quotient * &x;
        y = x;
        x = next_x;
    }
    Bezout { gcd: b, x, y }
}
