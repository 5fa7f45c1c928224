//! Lagrange interpolation in a prime field.

use crate::{
    errors::InterpolationError,
    modular::{check_modulus, mod_pow, normalize},
    polynomial::{Point, Polynomial},
};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::HashSet;

/// The unique polynomial of minimal degree going through a set of points.
///
/// The points' abscissas have to be distinct modulo the field. The part of each Lagrange basis
/// that doesn't depend on the evaluated abscissa, `y_j / Π_{m≠j} (x_j - x_m)`, is computed once
/// at construction, so evaluating at many abscissas only pays for the numerators.
#[derive(Debug, Clone)]
pub struct LagrangePolynomial {
    /// The interpolated points, reduced into the field.
    points: Vec<Point>,

    /// `y_j / Π_{m≠j} (x_j - x_m)` for every point.
    weights: Vec<BigInt>,

    /// The field modulus.
    modulus: BigInt,
}

impl LagrangePolynomial {
    /// Creates the interpolating polynomial for `points`, O(n^2).
    pub fn new(points: Vec<Point>, modulus: BigInt) -> Result<Self, InterpolationError> {
        check_modulus(&modulus)?;
        if points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }
        let points: Vec<Point> = points
            .into_iter()
            .map(|point| Point::new(normalize(&point.x, &modulus), normalize(&point.y, &modulus)))
            .collect();

        let abscissas: HashSet<&BigInt> = points.iter().map(|point| &point.x).collect();
        if abscissas.len() != points.len() {
            return Err(InterpolationError::DuplicateAbscissas);
        }

        let mut weights = Vec::with_capacity(points.len());
        for (i, pi) in points.iter().enumerate() {
            let mut den = BigInt::one();
            for (j, pj) in points.iter().enumerate() {
                if j != i {
                    den = normalize(&(den * (&pi.x - &pj.x)), &modulus);
                }
            }
            let den_inv = mod_pow(&den, &-BigInt::one(), &modulus)?;
            weights.push(normalize(&(den_inv * &pi.y), &modulus));
        }
        Ok(LagrangePolynomial { points, weights, modulus })
    }

    /// The interpolated points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The field modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Evaluate the interpolated polynomial at x, O(n^2).
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut res = BigInt::zero();
        for (i, weight) in self.weights.iter().enumerate() {
            let mut term = weight.clone();
            for (j, pj) in self.points.iter().enumerate() {
                if j != i {
                    term = normalize(&(term * (x - &pj.x)), &self.modulus);
                }
            }
            res = normalize(&(res + term), &self.modulus);
        }
        res
    }

    /// Lagrange interpolation at zero, which yields the constant term.
    pub fn interpolate_at_zero(&self) -> BigInt {
        self.eval(&BigInt::zero())
    }

    /// Expand the interpolated polynomial into its coefficients, O(n^3).
    pub fn to_polynomial(&self) -> Result<Polynomial, InterpolationError> {
        let mut res = Polynomial::new(Vec::new(), self.modulus.clone())?;
        for (i, weight) in self.weights.iter().enumerate() {
            let mut num = Polynomial::new(vec![weight.clone()], self.modulus.clone())?;
            for (j, pj) in self.points.iter().enumerate() {
                if j != i {
                    let px = Polynomial::new(vec![-&pj.x, BigInt::one()], self.modulus.clone())?;
                    num = (num * &px)?;
                }
            }
            res = (res + &num)?;
        }
        res.canonicalize();
        Ok(res)
    }
}

/// Construct the coefficients of the polynomial going through `points`, O(n^3).
pub fn lagrange_polynomial(points: Vec<Point>, modulus: BigInt) -> Result<Polynomial, InterpolationError> {
    LagrangePolynomial::new(points, modulus)?.to_polynomial()
}
