//! Euclidean Remainder

use crate::errors::ModularError;
use num_bigint::BigInt;
use num_traits::Signed;

/// Ensures a modulus can define a field: it has to be strictly positive.
pub fn check_modulus(modulus: &BigInt) -> Result<(), ModularError> {
    if modulus.is_positive() { Ok(()) } else { Err(ModularError::InvalidModulus) }
}

/// Reduces `value` into `[0, modulus)`.
///
/// Unlike the `%` operator, which truncates towards zero, the result is never negative.
///
/// ```
/// use math_lib::modular::modulo;
/// use num_bigint::BigInt;
///
/// let reduced = modulo(&BigInt::from(-3), &BigInt::from(7)).unwrap();
/// assert_eq!(reduced, BigInt::from(4));
/// ```
pub fn modulo(value: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    check_modulus(modulus)?;
    Ok(normalize(value, modulus))
}

/// Reduction for callers that already validated the modulus.
pub(crate) fn normalize(value: &BigInt, modulus: &BigInt) -> BigInt {
    ((value % modulus) + modulus) % modulus
}
