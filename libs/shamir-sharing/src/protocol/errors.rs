//! Secret Sharing Scheme errors.

use math_lib::errors::{InterpolationError, PolynomialError, SamplingError};
use num_bigint::BigInt;
use thiserror::Error;

/// Share generation failure.
#[derive(Error, Debug)]
pub enum ShareGenerationError {
    /// The threshold is zero.
    #[error("threshold must be at least one")]
    InvalidThreshold,

    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// The modulus leaves no room for random coefficients and abscissas.
    #[error("modulus must be at least 3")]
    ModulusTooSmall,

    /// The field does not hold enough distinct abscissas for the requested shares.
    #[error("cannot pick {requested} distinct abscissas in a field with {available} candidates")]
    NotEnoughAbscissas {
        /// The number of shares requested.
        requested: u32,

        /// The number of abscissas available.
        available: BigInt,
    },

    /// Random sampling failed.
    #[error("sampling failed: {0}")]
    Sampling(#[from] SamplingError),

    /// Failed to build the polynomial.
    #[error("failed building polynomial")]
    Polynomial(#[from] PolynomialError),
}

/// Secret recovery failure.
#[derive(Error, Debug)]
pub enum RecoverSecretError {
    /// The polynomial interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
