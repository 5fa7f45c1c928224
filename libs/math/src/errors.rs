//! Crate errors.

use thiserror::Error;

/// Modular arithmetic error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ModularError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// The value shares a common factor with the modulus.
    #[error("no modular inverse exists")]
    NoInverse,
}

/// Random sampling error.
#[derive(Error, Debug)]
pub enum SamplingError {
    /// One of the range bounds is negative.
    #[error("range bounds must be non-negative")]
    InvalidRange,

    /// The range does not fit in an addressable buffer.
    #[error("range too large")]
    RangeTooLarge,

    /// The entropy source could not produce bytes.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),
}

/// Polynomial error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PolynomialError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// The operands are defined over different moduli.
    #[error("polynomials have different moduli")]
    ModulusMismatch,

    /// Coefficient not found.
    #[error("polynomial coefficient not found")]
    CoefficientNotFound,

    /// A value has no inverse under the modulus.
    #[error("no modular inverse exists")]
    NoInverse,

    /// Arithmetic overflow.
    #[error("arithmetic overflow")]
    Arithmetic,
}

impl From<ModularError> for PolynomialError {
    fn from(e: ModularError) -> Self {
        match e {
            ModularError::InvalidModulus => Self::InvalidModulus,
            ModularError::NoInverse => Self::NoInverse,
        }
    }
}

/// Failed Interpolation Error
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InterpolationError {
    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,

    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// The point sequence has duplicate abscissas.
    #[error("point sequence has duplicate abscissas")]
    DuplicateAbscissas,

    /// A denominator has no inverse under the modulus.
    #[error("interpolation denominator has no modular inverse")]
    NoInverse,

    /// Polynomial error.
    #[error("polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),
}

impl From<ModularError> for InterpolationError {
    fn from(e: ModularError) -> Self {
        match e {
            ModularError::InvalidModulus => Self::InvalidModulus,
            ModularError::NoInverse => Self::NoInverse,
        }
    }
}
