//! `Polynomial` Operations

use crate::{errors::PolynomialError, modular::normalize, polynomial::Polynomial};
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::{Add, Mul};

impl Add<&Polynomial> for Polynomial {
    type Output = Result<Polynomial, PolynomialError>;

    fn add(self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        if self.modulus != other.modulus {
            return Err(PolynomialError::ModulusMismatch);
        }
        let modulus = self.modulus;
        let mut coefficients = self.coefficients;

        let mut other_iter = other.coefficients.iter();
        for (coef, other_coef) in coefficients.iter_mut().zip(other_iter.by_ref()) {
            *coef = normalize(&(&*coef + other_coef), &modulus);
        }
        coefficients.extend(other_iter.cloned());

        Ok(Polynomial { coefficients, modulus })
    }
}

/// Index of the product coefficient for the terms at `i` and `j`.
fn product_index(i: usize, j: usize) -> Result<usize, PolynomialError> {
    i.checked_add(j).ok_or(PolynomialError::Arithmetic)
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Result<Polynomial, PolynomialError>;

    fn mul(self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        if self.modulus != other.modulus {
            return Err(PolynomialError::ModulusMismatch);
        }
        if self.is_empty() || other.is_empty() {
            return Ok(Polynomial { coefficients: Vec::new(), modulus: self.modulus });
        }
        let len = self.coefficients.len().saturating_add(other.degree());
        let mut product = vec![BigInt::zero(); len];
        for (i, c) in self.coefficients.iter().enumerate() {
            for (j, o) in other.coefficients.iter().enumerate() {
                let k = product_index(i, j)?;
                let coef_k = product.get_mut(k).ok_or(PolynomialError::Arithmetic)?;
                *coef_k = normalize(&(&*coef_k + c * o), &self.modulus);
            }
        }
        Ok(Polynomial { coefficients: product, modulus: self.modulus })
    }
}
