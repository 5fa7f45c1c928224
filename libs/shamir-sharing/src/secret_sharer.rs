//! Secret sharer bound to a field and a sharing configuration.

use crate::{
    config::SharingConfig,
    protocol::{self, RecoverSecretError, Share, ShareGenerationError},
};
use math_lib::random::EntropySource;
use num_bigint::BigInt;
use num_traits::Signed;

/// Generates and recovers shares for a fixed modulus and configuration.
#[derive(Clone, Debug)]
pub struct ShamirSecretSharer {
    config: SharingConfig,
    modulus: BigInt,
}

impl ShamirSecretSharer {
    /// Creates a new secret sharer.
    ///
    /// The modulus is expected to be prime, which is not checked.
    pub fn new(config: SharingConfig, modulus: BigInt) -> Result<Self, ShareGenerationError> {
        config.validate()?;
        if !modulus.is_positive() {
            return Err(ShareGenerationError::InvalidModulus);
        }
        Ok(Self { config, modulus })
    }

    /// The sharing configuration.
    pub fn config(&self) -> &SharingConfig {
        &self.config
    }

    /// The field modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Generates shares for the given secret.
    pub fn generate_shares(&self, secret: &BigInt) -> Result<Vec<Share>, ShareGenerationError> {
        protocol::create_shares(secret, &self.config, &self.modulus)
    }

    /// Generates shares for the given secret using the provided entropy source.
    pub fn generate_shares_with_source<S>(
        &self,
        secret: &BigInt,
        source: &mut S,
    ) -> Result<Vec<Share>, ShareGenerationError>
    where
        S: EntropySource + ?Sized,
    {
        protocol::create_shares_with_source(secret, &self.config, &self.modulus, source)
    }

    /// Recovers the secret behind the provided shares.
    pub fn recover(&self, shares: &[Share]) -> Result<BigInt, RecoverSecretError> {
        protocol::reconstruct(shares, &self.modulus)
    }
}
