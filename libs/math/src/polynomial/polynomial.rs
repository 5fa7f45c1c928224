//! Polynomial in Finite Field.

use crate::{
    errors::PolynomialError,
    modular::{check_modulus, normalize},
};
use num_bigint::BigInt;
use num_traits::Zero;

/// Polynomial Expression.
///
/// Coefficients are indexed by the power of the variable they multiply, the first one being the
/// constant term. They are kept reduced modulo the field's modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients of the polynomial.
    pub(crate) coefficients: Vec<BigInt>,

    /// The field modulus.
    pub(crate) modulus: BigInt,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<BigInt>, modulus: BigInt) -> Result<Polynomial, PolynomialError> {
        check_modulus(&modulus)?;
        let coefficients = coefficients.iter().map(|c| normalize(c, &modulus)).collect();
        Ok(Polynomial { coefficients, modulus })
    }

    /// Add a coefficient to the polynomial.
    pub fn add_coefficient(&mut self, coefficient: &BigInt) {
        self.coefficients.push(normalize(coefficient, &self.modulus));
    }

    /// Remove leading zeros.
    pub fn canonicalize(&mut self) {
        while self.coefficients.last().is_some_and(|c| c.is_zero()) {
            self.coefficients.pop();
        }
    }

    /// Check if polynomial is empty.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Get the modulus of the field this polynomial lives in.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Get the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Get coefficient at index.
    pub fn get_coefficient(&self, idx: usize) -> Result<&BigInt, PolynomialError> {
        self.coefficients.get(idx).ok_or(PolynomialError::CoefficientNotFound)
    }

    /// Evaluates the polynomial at a given x using Horner's method.
    ///
    /// Every intermediate value is reduced so they stay bounded by the modulus. The empty
    /// polynomial evaluates to zero.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut eval = BigInt::zero();
        for coefficient in self.coefficients.iter().rev() {
            eval = normalize(&(eval * x + coefficient), &self.modulus);
        }
        eval
    }
}
