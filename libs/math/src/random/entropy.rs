//! Entropy sources.

use rand::{CryptoRng, RngCore};

/// A source of cryptographically secure random bytes.
///
/// Every cryptographic `rand` generator is a source, which means [rand::rngs::OsRng] can be used
/// in production and a seeded [rand::rngs::StdRng] where reproducibility is needed.
pub trait EntropySource {
    /// Fills `buffer` with random bytes.
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), rand::Error>;
}

impl<R: RngCore + CryptoRng + ?Sized> EntropySource for R {
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), rand::Error> {
        self.try_fill_bytes(buffer)
    }
}
