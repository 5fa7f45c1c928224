//! Shamir Secret Sharing Protocol

use crate::{
    config::SharingConfig,
    protocol::{RecoverSecretError, ShareGenerationError},
};
use math_lib::{
    polynomial::{LagrangePolynomial, Point, Polynomial},
    random::{random_with_source, EntropySource},
};
use num_bigint::BigInt;
use num_traits::Signed;
use rand::rngs::OsRng;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A share of a secret: a point of the polynomial hiding it.
pub type Share = Point;

/// Splits `secret` into `config.total_shares` shares, any `config.threshold` of which recover it.
///
/// Randomness comes from the operating system. See [create_shares_with_source].
pub fn create_shares(
    secret: &BigInt,
    config: &SharingConfig,
    modulus: &BigInt,
) -> Result<Vec<Share>, ShareGenerationError> {
    create_shares_with_source(secret, config, modulus, &mut OsRng)
}

/// Splits `secret` into `config.total_shares` shares using the provided entropy source.
///
/// The secret is reduced into the field. Random coefficients and abscissas are drawn from
/// `[2, modulus - 1]`, and abscissas are drawn without replacement so every share has a distinct
/// one.
pub fn create_shares_with_source<S>(
    secret: &BigInt,
    config: &SharingConfig,
    modulus: &BigInt,
    source: &mut S,
) -> Result<Vec<Share>, ShareGenerationError>
where
    S: EntropySource + ?Sized,
{
    config.validate()?;
    if !modulus.is_positive() {
        return Err(ShareGenerationError::InvalidModulus);
    }
    let low = BigInt::from(2);
    let high = modulus - 1u32;
    if high < low {
        return Err(ShareGenerationError::ModulusTooSmall);
    }
    let available = &high - &low + 1u32;
    if BigInt::from(config.total_shares) > available {
        return Err(ShareGenerationError::NotEnoughAbscissas {
            requested: config.total_shares,
            available,
        });
    }

    debug!(threshold = config.threshold, total_shares = config.total_shares, "Generating shares");
    let mut polynomial = Polynomial::new(vec![secret.clone()], modulus.clone())?;
    for _ in 0..config.polynomial_degree() {
        let coefficient = random_with_source(&low, &high, source)?;
        polynomial.add_coefficient(&coefficient);
    }

    let total_shares = usize::try_from(config.total_shares).unwrap_or(usize::MAX);
    let mut abscissas = HashSet::with_capacity(total_shares);
    let mut shares = Vec::with_capacity(total_shares);
    while shares.len() < total_shares {
        let x = random_with_source(&low, &high, source)?;
        if abscissas.contains(&x) {
            trace!("Abscissa collision, resampling");
            continue;
        }
        let y = polynomial.eval(&x);
        abscissas.insert(x.clone());
        shares.push(Share::new(x, y));
    }
    Ok(shares)
}

/// Recovers the secret behind `shares`.
///
/// This interpolates the shares at zero. With fewer shares than the threshold they were created
/// with, the result is some unrelated field element rather than an error: the threshold is not
/// known at this point.
pub fn reconstruct(shares: &[Share], modulus: &BigInt) -> Result<BigInt, RecoverSecretError> {
    debug!(shares = shares.len(), "Reconstructing secret");
    let lagrange = LagrangePolynomial::new(shares.to_vec(), modulus.clone())?;
    Ok(lagrange.interpolate_at_zero())
}

/// Recovers the whole polynomial behind `shares`, its constant term being the secret.
pub fn recover_polynomial(shares: &[Share], modulus: &BigInt) -> Result<Polynomial, RecoverSecretError> {
    debug!(shares = shares.len(), "Recovering polynomial");
    let lagrange = LagrangePolynomial::new(shares.to_vec(), modulus.clone())?;
    Ok(lagrange.to_polynomial()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod test {
    use super::*;
    use math_lib::errors::{InterpolationError, SamplingError};
    use num_traits::{One, Zero};
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;
    use test_logger::{tracing, Tracing};

    fn mersenne_127() -> BigInt {
        (BigInt::one() << 127) - 1
    }

    #[rstest]
    fn creates_requested_shares(_tracing: &Tracing) {
        let shares = create_shares(&BigInt::from(42), &SharingConfig::new(3, 5), &mersenne_127()).unwrap();
        assert_eq!(shares.len(), 5);
        let abscissas: HashSet<_> = shares.iter().map(|share| share.x().clone()).collect();
        assert_eq!(abscissas.len(), 5);
    }

    #[rstest]
    fn shares_stay_in_field(_tracing: &Tracing) {
        let modulus = BigInt::from(97);
        let shares = create_shares(&BigInt::from(500), &SharingConfig::new(3, 20), &modulus).unwrap();
        for share in &shares {
            assert!(share.x() >= &BigInt::from(2) && share.x() < &modulus);
            assert!(!share.y().is_negative() && share.y() < &modulus);
        }
    }

    #[rstest]
    fn reconstructs_with_threshold(_tracing: &Tracing) {
        let modulus = mersenne_127();
        let shares = create_shares(&BigInt::from(42), &SharingConfig::new(3, 5), &modulus).unwrap();
        assert_eq!(reconstruct(&shares[..3], &modulus).unwrap(), BigInt::from(42));
        assert_eq!(reconstruct(&shares[2..], &modulus).unwrap(), BigInt::from(42));
        assert_eq!(reconstruct(&shares, &modulus).unwrap(), BigInt::from(42));
    }

    #[rstest]
    #[case(1)]
    #[case(1000)]
    #[case(u64::MAX)]
    fn reconstructs_different_secrets(_tracing: &Tracing, #[case] secret: u64) {
        let modulus = mersenne_127();
        let secret = BigInt::from(secret);
        let shares = create_shares(&secret, &SharingConfig::new(3, 5), &modulus).unwrap();
        assert_eq!(reconstruct(&shares[..3], &modulus).unwrap(), secret);
    }

    #[test]
    fn zero_secret() {
        let modulus = BigInt::from(97);
        let shares = create_shares(&BigInt::zero(), &SharingConfig::new(2, 2), &modulus).unwrap();
        assert_eq!(reconstruct(&shares, &modulus).unwrap(), BigInt::zero());
    }

    #[test]
    fn secret_is_reduced_into_field() {
        let modulus = BigInt::from(97);
        let shares = create_shares(&BigInt::from(100), &SharingConfig::new(2, 3), &modulus).unwrap();
        assert_eq!(reconstruct(&shares, &modulus).unwrap(), BigInt::from(3));
    }

    #[test]
    fn threshold_one_shares_the_secret() {
        let modulus = BigInt::from(97);
        let shares = create_shares(&BigInt::from(11), &SharingConfig::new(1, 4), &modulus).unwrap();
        for share in shares {
            assert_eq!(share.y(), &BigInt::from(11));
        }
    }

    #[test]
    fn deterministic_with_seeded_source() {
        let modulus = mersenne_127();
        let config = SharingConfig::new(3, 5);
        let first = create_shares_with_source(&BigInt::from(7), &config, &modulus, &mut StdRng::seed_from_u64(1));
        let second = create_shares_with_source(&BigInt::from(7), &config, &modulus, &mut StdRng::seed_from_u64(1));
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn exhausts_small_field() {
        // [2, 6] holds exactly 5 abscissas, all of them have to be used.
        let modulus = BigInt::from(7);
        let shares = create_shares(&BigInt::from(3), &SharingConfig::new(2, 5), &modulus).unwrap();
        let mut abscissas: Vec<_> = shares.iter().map(|share| share.x().clone()).collect();
        abscissas.sort();
        assert_eq!(abscissas, (2..7).map(BigInt::from).collect::<Vec<_>>());
        assert_eq!(reconstruct(&shares[1..3], &modulus).unwrap(), BigInt::from(3));
    }

    #[test]
    fn not_enough_abscissas() {
        let result = create_shares(&BigInt::from(3), &SharingConfig::new(2, 6), &BigInt::from(7));
        assert!(matches!(result, Err(ShareGenerationError::NotEnoughAbscissas { requested: 6, .. })));
    }

    #[rstest]
    #[case(0, ShareGenerationError::InvalidModulus)]
    #[case(-7, ShareGenerationError::InvalidModulus)]
    #[case(2, ShareGenerationError::ModulusTooSmall)]
    fn rejects_bad_modulus(#[case] modulus: i64, #[case] expected: ShareGenerationError) {
        let result = create_shares(&BigInt::from(1), &SharingConfig::new(2, 2), &BigInt::from(modulus));
        assert_eq!(result.unwrap_err().to_string(), expected.to_string());
    }

    #[test]
    fn rejects_zero_threshold() {
        let result = create_shares(&BigInt::from(1), &SharingConfig::new(0, 2), &BigInt::from(97));
        assert!(matches!(result, Err(ShareGenerationError::InvalidThreshold)));
    }

    #[test]
    fn surfaces_entropy_failure() {
        struct Failing;
        impl rand::RngCore for Failing {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, _: &mut [u8]) {}
            fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), rand::Error> {
                Err(rand::Error::new("unavailable"))
            }
        }
        impl rand::CryptoRng for Failing {}

        let result =
            create_shares_with_source(&BigInt::from(1), &SharingConfig::new(2, 2), &BigInt::from(97), &mut Failing);
        assert!(matches!(result, Err(ShareGenerationError::Sampling(SamplingError::Entropy(_)))));
    }

    #[test]
    fn reconstruct_rejects_duplicates() {
        let shares = vec![Share::new(BigInt::from(3), BigInt::from(1)), Share::new(BigInt::from(3), BigInt::from(2))];
        let result = reconstruct(&shares, &BigInt::from(97));
        assert!(matches!(result, Err(RecoverSecretError::Interpolation(InterpolationError::DuplicateAbscissas))));
    }

    #[test]
    fn reconstruct_rejects_empty() {
        let result = reconstruct(&[], &BigInt::from(97));
        assert!(matches!(result, Err(RecoverSecretError::Interpolation(InterpolationError::EmptySequence))));
    }

    #[test]
    fn recovers_polynomial() {
        let modulus = BigInt::from(1_000_003);
        let shares = create_shares(&BigInt::from(1234), &SharingConfig::new(4, 6), &modulus).unwrap();
        let polynomial = recover_polynomial(&shares[..4], &modulus).unwrap();
        assert!(polynomial.degree() <= 3);
        assert_eq!(polynomial.get_coefficient(0).unwrap(), &BigInt::from(1234));
        for share in &shares {
            assert_eq!(&polynomial.eval(share.x()), share.y());
        }
    }
}
