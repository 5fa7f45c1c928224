//! Uniform sampling of integers in a range.

use super::EntropySource;
use crate::errors::SamplingError;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};
use rand::rngs::OsRng;

/// Samples an integer uniformly in `[low, high]` using the operating system's random source.
///
/// See [random_with_source].
pub fn random(low: &BigInt, high: &BigInt) -> Result<BigInt, SamplingError> {
    random_with_source(low, high, &mut OsRng)
}

/// Samples an integer uniformly in `[low, high]` using the provided entropy source.
///
/// Both bounds are inclusive and have to be non-negative. Bounds in reverse order are swapped.
///
/// Values are drawn through rejection sampling: random bytes are masked down to the bit length of
/// the range size and draws that fall outside of it are discarded. The masked space is less than
/// twice the range size so the expected number of draws is at most two.
pub fn random_with_source<S>(low: &BigInt, high: &BigInt, source: &mut S) -> Result<BigInt, SamplingError>
where
    S: EntropySource + ?Sized,
{
    if low.is_negative() || high.is_negative() {
        return Err(SamplingError::InvalidRange);
    }
    let (low, high) = if low > high { (high, low) } else { (low, high) };

    let range = high - low + 1u32;
    let bits = range.bits();
    let byte_length = usize::try_from(bits.div_ceil(8)).map_err(|_| SamplingError::RangeTooLarge)?;
    let mask = (BigUint::one() << bits) - 1u32;

    let mut buffer = vec![0u8; byte_length];
    loop {
        source.fill(&mut buffer)?;
        let candidate = BigInt::from(BigUint::from_bytes_be(&buffer) & &mask);
        if candidate < range {
            return Ok(low + candidate);
        }
    }
}
