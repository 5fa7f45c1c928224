//! Modular exponentiation and inverses.

use super::{extended_gcd, modulo};
use crate::errors::ModularError;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Computes the multiplicative inverse of `value` modulo `modulus`.
///
/// Fails with [ModularError::NoInverse] if `value` and `modulus` are not coprime, which for a
/// prime modulus only happens when `value` is a multiple of it.
pub fn modular_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    let value = modulo(value, modulus)?;
    let bezout = extended_gcd(&value, modulus);
    if !bezout.gcd.is_one() {
        return Err(ModularError::NoInverse);
    }
    modulo(&bezout.x, modulus)
}

/// Computes `base ^ exponent mod modulus`.
///
/// A negative exponent raises the inverse of `base` to `-exponent`, so `mod_pow(a, -1, m)` is the
/// inverse of `a`. The result is always in `[0, modulus)`.
///
/// ```
/// use math_lib::modular::mod_pow;
/// use num_bigint::BigInt;
///
/// // 3 * 5 = 15 = 1 mod 7
/// let inverse = mod_pow(&BigInt::from(3), &BigInt::from(-1), &BigInt::from(7)).unwrap();
/// assert_eq!(inverse, BigInt::from(5));
/// ```
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    if exponent.is_zero() {
        return modulo(&BigInt::one(), modulus);
    }
    if exponent.is_negative() {
        let inverse = modular_inverse(base, modulus)?;
        return mod_pow(&inverse, &-exponent, modulus);
    }
    let base = modulo(base, modulus)?;
    Ok(base.modpow(exponent, modulus))
}
